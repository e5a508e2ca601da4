pub mod row;
pub mod state;
pub mod view_model;

use self::row::{build_table_body, SaleRow, SalesTableBody, NO_SALES_MESSAGE, SALES_COLUMNS};
use self::state::{create_state, SalesViewState};
use self::view_model::SalesListViewModel;
use crate::domain::a003_sale::api::{GlooSalesBackend, SharedSalesBackend};
use crate::domain::a003_sale::ui::dialog::{SaleDialogContext, SaleDialogSlot, SaleSubmitter};
use crate::shared::api_utils::ApiConfig;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::domain::a003_sale::aggregate::Sale;
use leptos::prelude::*;
use std::sync::Arc;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

type SalesVm = SalesListViewModel<GlooSalesBackend, RwSignal<SalesViewState>>;

#[component]
#[allow(non_snake_case)]
pub fn SalesList(
    /// Create dialog, rendered in the page header
    #[prop(optional)]
    create_dialog: Option<SaleDialogSlot>,
    /// Update form, rendered in the modal while a sale is selected;
    /// without it the modal shows a read-only summary of the sale
    #[prop(optional)]
    update_dialog: Option<SaleDialogSlot>,
) -> impl IntoView {
    let config = use_context::<ApiConfig>().unwrap_or_default();
    let backend = Arc::new(GlooSalesBackend::new(config));
    let state = create_state();
    let vm: SalesVm = SalesListViewModel::new(backend, state);

    vm.mount(spawn_local);

    on_cleanup({
        let vm = vm.clone();
        move || {
            vm.teardown();
            vm.backend().abort_in_flight();
        }
    });

    // Dialogs and table rebuild only when their own inputs change.
    let sales = Memo::new(move |_| state.with(|s| s.sales.clone()));
    let products = Memo::new(move |_| state.with(|s| s.products.clone()));
    let stores = Memo::new(move |_| state.with(|s| s.stores.clone()));
    let dialog_sale = Memo::new(move |_| state.with(|s| s.update_dialog_sale().cloned()));

    let create_slot = {
        let vm = vm.clone();
        move || {
            let slot = create_dialog.clone()?;
            let context = SaleDialogContext::new(
                products.into(),
                stores.into(),
                None,
                submitter(&vm, None),
            );
            Some(slot(context))
        }
    };

    let update_slot = {
        let vm = vm.clone();
        move || {
            let sale = dialog_sale.get()?;
            let close_vm = vm.clone();
            let context = SaleDialogContext::new(
                products.into(),
                stores.into(),
                Some(sale.clone()),
                submitter(&vm, sale.to_string_id()),
            )
            .with_on_close(move || close_vm.close_update());
            let body = match update_dialog.clone() {
                Some(slot) => slot(context),
                None => sale_summary_view(&sale, context),
            };
            let on_close = Callback::new({
                let vm = vm.clone();
                move |_| vm.close_update()
            });

            Some(view! {
                <Modal title="Update Sale" on_close=on_close class="sale-update-modal">
                    {body}
                </Modal>
            })
        }
    };

    let table_body = {
        let vm = vm.clone();
        move || {
            let sales = sales.get();
            match build_table_body(&sales) {
                SalesTableBody::NoSales => view! {
                    <tr class="table__row">
                        <td class="table__cell table__cell--empty" colspan={SALES_COLUMNS.len().to_string()}>
                            {NO_SALES_MESSAGE}
                        </td>
                    </tr>
                }
                .into_any(),
                SalesTableBody::Rows(rows) => sales
                    .into_iter()
                    .zip(rows)
                    .map(|(sale, row)| sale_row_view(vm.clone(), sale, row))
                    .collect_view()
                    .into_any(),
            }
        }
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    {icon("sales")}
                    <h1 class="header__title">{"Overall Sales"}</h1>
                </div>
            </div>

            <div class="page__section">
                <div class="header">
                    <div class="header__content">
                        <h3 class="header__title">{"Sales"}</h3>
                    </div>
                    <div class="header__actions">
                        {create_slot}
                    </div>
                </div>

                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                {SALES_COLUMNS
                                    .iter()
                                    .map(|title| view! { <th class="table__header-cell">{*title}</th> })
                                    .collect_view()}
                            </tr>
                        </thead>
                        <tbody>
                            {table_body}
                        </tbody>
                    </table>
                </div>
            </div>

            {update_slot}
        </div>
    }
}

fn sale_row_view(vm: SalesVm, sale: Sale, row: SaleRow) -> impl IntoView {
    let edit_vm = vm.clone();
    let delete_id = row.id.clone();

    view! {
        <tr class="table__row">
            <td class="table__cell">{row.short_id}</td>
            <td class="table__cell">{row.store_name}</td>
            <td class="table__cell">{row.quantity}</td>
            <td class="table__cell">{row.product_count}</td>
            <td class="table__cell">{row.total_amount}</td>
            <td class="table__cell">{row.created_date}</td>
            <td class="table__cell">{row.updated_date}</td>
            <td class="table__cell table__cell--actions">
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| edit_vm.open_update(sale.clone())
                >
                    {icon("edit")}
                    "Edit"
                </Button>
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| {
                        let Some(id) = delete_id.clone() else {
                            log::warn!("Cannot delete a sale without an id");
                            return;
                        };
                        let vm = vm.clone();
                        spawn_local(async move { vm.delete_sale(id).await });
                    }
                >
                    {icon("delete")}
                    "Delete"
                </Button>
            </td>
        </tr>
    }
}

/// Update modal body when the app mounts no update form
fn sale_summary_view(sale: &Sale, context: SaleDialogContext) -> AnyView {
    let row = SaleRow::from(sale);
    view! {
        <dl class="sale-summary">
            <dt>{SALES_COLUMNS[0]}</dt>
            <dd>{row.short_id}</dd>
            <dt>{SALES_COLUMNS[1]}</dt>
            <dd>{row.store_name}</dd>
            <dt>{SALES_COLUMNS[2]}</dt>
            <dd>{row.quantity}</dd>
            <dt>{SALES_COLUMNS[3]}</dt>
            <dd>{row.product_count}</dd>
            <dt>{SALES_COLUMNS[4]}</dt>
            <dd>{row.total_amount}</dd>
        </dl>
        <div class="modal-footer">
            <Button appearance=ButtonAppearance::Secondary on_click=move |_| context.close()>
                "Close"
            </Button>
        </div>
    }
    .into_any()
}

fn submitter(vm: &SalesVm, sale_id: Option<String>) -> SaleSubmitter {
    let backend: SharedSalesBackend = vm.backend();
    let refresh_vm = vm.clone();
    SaleSubmitter::new(backend, sale_id, move || {
        let vm = refresh_vm.clone();
        spawn_local(async move { vm.fetch_sales().await });
    })
}
