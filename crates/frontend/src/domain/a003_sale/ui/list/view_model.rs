use super::state::SalesViewState;
use crate::domain::a003_sale::api::{SalesBackend, SalesPayload};
use contracts::domain::a003_sale::aggregate::Sale;
use futures::future::{FutureExt, LocalBoxFuture};
use leptos::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Where the view model writes its state transitions.
pub trait ViewStore: Clone + 'static {
    /// Applies `f`; returns `false` when the store no longer accepts writes.
    fn apply(&self, f: impl FnOnce(&mut SalesViewState)) -> bool;
}

impl ViewStore for RwSignal<SalesViewState> {
    fn apply(&self, f: impl FnOnce(&mut SalesViewState)) -> bool {
        // Disposed signals refuse the write instead of panicking.
        self.try_update(f).is_some()
    }
}

/// Liveness flag of the page; flipped once on cleanup.
#[derive(Clone, Debug)]
pub struct ViewLifecycle(Arc<AtomicBool>);

impl ViewLifecycle {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_active(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    pub fn tear_down(&self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Default for ViewLifecycle {
    fn default() -> Self {
        Self::new()
    }
}

/// ViewModel for the sales list: three independent loads, delete with
/// refresh, and the update dialog selection.
///
/// Failures never reach the UI. They are logged and the previous data stays.
pub struct SalesListViewModel<B, S> {
    backend: Arc<B>,
    store: S,
    lifecycle: ViewLifecycle,
}

impl<B, S: Clone> Clone for SalesListViewModel<B, S> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            store: self.store.clone(),
            lifecycle: self.lifecycle.clone(),
        }
    }
}

impl<B, S> SalesListViewModel<B, S>
where
    B: SalesBackend + 'static,
    S: ViewStore,
{
    pub fn new(backend: Arc<B>, store: S) -> Self {
        Self {
            backend,
            store,
            lifecycle: ViewLifecycle::new(),
        }
    }

    pub fn backend(&self) -> Arc<B> {
        Arc::clone(&self.backend)
    }

    pub fn lifecycle(&self) -> &ViewLifecycle {
        &self.lifecycle
    }

    /// Hands the three initial loads to `spawn` without waiting on any of them.
    pub fn mount(&self, spawn: impl Fn(LocalBoxFuture<'static, ()>)) {
        let products = self.clone();
        spawn(async move { products.fetch_products().await }.boxed_local());
        let sales = self.clone();
        spawn(async move { sales.fetch_sales().await }.boxed_local());
        let stores = self.clone();
        spawn(async move { stores.fetch_stores().await }.boxed_local());
    }

    /// Late responses are dropped after this call.
    pub fn teardown(&self) {
        self.lifecycle.tear_down();
    }

    pub async fn fetch_sales(&self) {
        match self.backend.list_sales().await {
            Ok(SalesPayload::Accepted(sales)) => {
                log::debug!("Sales data response: {} records", sales.len());
                self.commit("sales", move |s| s.replace_sales(sales));
            }
            Ok(SalesPayload::Rejected(raw)) => {
                log::warn!("Unexpected sales data format: {}", raw);
            }
            Err(e) => log::error!("Error fetching sales: {}", e),
        }
    }

    pub async fn fetch_products(&self) {
        match self.backend.list_products().await {
            Ok(products) => self.commit("products", move |s| s.replace_products(products)),
            Err(e) => log::error!("Error fetching products: {}", e),
        }
    }

    pub async fn fetch_stores(&self) {
        match self.backend.list_stores().await {
            Ok(stores) => self.commit("stores", move |s| s.replace_stores(stores)),
            Err(e) => log::error!("Error fetching stores: {}", e),
        }
    }

    /// Deletes on the backend, then reloads the whole list once.
    pub async fn delete_sale(&self, id: String) {
        match self.backend.delete_sale(&id).await {
            Ok(()) => self.fetch_sales().await,
            Err(e) => log::error!("Error deleting sale {}: {}", id, e),
        }
    }

    pub fn open_update(&self, sale: Sale) {
        self.commit("selection", move |s| s.open_update(sale));
    }

    pub fn close_update(&self) {
        self.commit("selection", SalesViewState::close_update);
    }

    fn commit(&self, what: &str, f: impl FnOnce(&mut SalesViewState)) {
        if !self.lifecycle.is_active() || !self.store.apply(f) {
            log::debug!("Dropped {} update: sales view is gone", what);
        }
    }
}
