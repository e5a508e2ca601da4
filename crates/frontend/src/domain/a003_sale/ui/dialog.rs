//! Hosting contract for the create/update sale dialogs.
//!
//! The page does not own dialog forms. The embedding app passes a builder per
//! dialog; the page calls it with a [`SaleDialogContext`] carrying the option
//! lists and a [`SaleSubmitter`] wired to the same backend and refresh.

use crate::domain::a003_sale::api::SharedSalesBackend;
use crate::shared::api_error::ApiError;
use contracts::domain::a001_store::aggregate::Store;
use contracts::domain::a002_product::aggregate::Product;
use contracts::domain::a003_sale::aggregate::{Sale, SaleDto};
use leptos::prelude::{AnyView, Signal};
use std::sync::Arc;

/// Builds a dialog view; same shape as the modal stack builders.
pub type SaleDialogSlot = Arc<dyn Fn(SaleDialogContext) -> AnyView + Send + Sync>;

type Action = Arc<dyn Fn() + Send + Sync>;

#[derive(Clone)]
pub struct SaleDialogContext {
    /// Option lists; they keep following the page's loads after the dialog opens
    pub products: Signal<Vec<Product>>,
    pub stores: Signal<Vec<Store>>,
    /// Sale being edited; `None` for the create dialog
    pub sale: Option<Sale>,
    pub submitter: SaleSubmitter,
    on_close: Option<Action>,
}

impl SaleDialogContext {
    pub fn new(
        products: Signal<Vec<Product>>,
        stores: Signal<Vec<Store>>,
        sale: Option<Sale>,
        submitter: SaleSubmitter,
    ) -> Self {
        Self {
            products,
            stores,
            sale,
            submitter,
            on_close: None,
        }
    }

    pub fn with_on_close(mut self, on_close: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_close = Some(Arc::new(on_close));
        self
    }

    /// Form defaults: the edited sale, or an empty form
    pub fn initial_form(&self) -> SaleDto {
        self.sale.as_ref().map(SaleDto::from_sale).unwrap_or_default()
    }

    /// Closes the hosting frame; no-op for the always-mounted create dialog.
    pub fn close(&self) {
        if let Some(on_close) = &self.on_close {
            on_close();
        }
    }
}

/// Sends a dialog form to the backend and reloads the sales list on success.
#[derive(Clone)]
pub struct SaleSubmitter {
    backend: SharedSalesBackend,
    sale_id: Option<String>,
    on_saved: Action,
}

impl SaleSubmitter {
    pub fn new(
        backend: SharedSalesBackend,
        sale_id: Option<String>,
        on_saved: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        Self {
            backend,
            sale_id,
            on_saved: Arc::new(on_saved),
        }
    }

    pub fn is_update(&self) -> bool {
        self.sale_id.is_some()
    }

    /// `PUT /sales/{id}` when editing, `POST /sales` otherwise.
    pub async fn submit(&self, dto: SaleDto) -> Result<(), ApiError> {
        if !dto.has_parallel_lines() {
            log::warn!(
                "Submitting sale with {} products and {} quantities",
                dto.products_id.len(),
                dto.quantity.len()
            );
        }
        match &self.sale_id {
            Some(id) => self.backend.update_sale(id, &dto).await?,
            None => self.backend.create_sale(&dto).await?,
        }
        (self.on_saved)();
        Ok(())
    }
}
