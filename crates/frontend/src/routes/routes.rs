use crate::domain::a003_sale::ui::list::SalesList;
use leptos::prelude::*;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <main class="app-main">
            <SalesList />
        </main>
    }
}
