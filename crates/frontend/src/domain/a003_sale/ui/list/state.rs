use contracts::domain::a001_store::aggregate::Store;
use contracts::domain::a002_product::aggregate::Product;
use contracts::domain::a003_sale::aggregate::Sale;
use leptos::prelude::*;

/// View state of the sales page.
///
/// Each list has exactly one writer: the completion of its own fetch.
/// `selected_sale`/`is_update_open` move together through
/// [`open_update`](Self::open_update) and [`close_update`](Self::close_update).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SalesViewState {
    pub sales: Vec<Sale>,
    pub products: Vec<Product>,
    pub stores: Vec<Store>,
    pub selected_sale: Option<Sale>,
    pub is_update_open: bool,
}

impl SalesViewState {
    pub fn replace_sales(&mut self, sales: Vec<Sale>) {
        self.sales = sales;
    }

    pub fn replace_products(&mut self, products: Vec<Product>) {
        self.products = products;
    }

    pub fn replace_stores(&mut self, stores: Vec<Store>) {
        self.stores = stores;
    }

    pub fn open_update(&mut self, sale: Sale) {
        self.selected_sale = Some(sale);
        self.is_update_open = true;
    }

    /// Always drops the selection, saved or not
    pub fn close_update(&mut self) {
        self.is_update_open = false;
        self.selected_sale = None;
    }

    /// Sale for the update dialog, only while the dialog is open
    pub fn update_dialog_sale(&self) -> Option<&Sale> {
        if self.is_update_open {
            self.selected_sale.as_ref()
        } else {
            None
        }
    }
}

pub fn create_state() -> RwSignal<SalesViewState> {
    RwSignal::new(SalesViewState::default())
}
