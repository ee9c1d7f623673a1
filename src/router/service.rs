use crate::enums::MethodToken;
use crate::matcher::MatchOutcome;
use crate::router::{RouteTable, RouterError, RouterOptions, RouterResult};
use parking_lot::RwLock;
use std::sync::Arc;

#[derive(Debug)]
struct RouterState<H> {
    staging: RouteTable<H>,
    readonly: Option<Arc<RouteTable<H>>>,
}

/// Build-then-serve wrapper: routes are added to a staging table, `seal`
/// publishes it as an immutable snapshot that lookups share.
#[derive(Debug)]
pub struct Router<H> {
    inner: RwLock<RouterState<H>>,
}

impl<H> Router<H> {
    pub fn new(options: Option<RouterOptions>) -> Self {
        Self {
            inner: RwLock::new(RouterState {
                staging: RouteTable::with_options(options.unwrap_or_default()),
                readonly: None,
            }),
        }
    }

    pub fn add(&self, pattern: &str, method: impl MethodToken, handler: H) -> RouterResult<()> {
        let mut guard = self.inner.write();

        if guard.readonly.is_some() {
            return Err(RouterError::AddWhileSealed {
                pattern: pattern.to_string(),
            });
        }

        guard.staging.insert(pattern, method, handler)?;
        Ok(())
    }

    /// Publishes the staging table. Sealing twice keeps the first snapshot.
    pub fn seal(&self) {
        let mut guard = self.inner.write();

        if guard.readonly.is_some() {
            return;
        }

        let options = *guard.staging.options();
        let table = std::mem::replace(&mut guard.staging, RouteTable::with_options(options));
        tracing::event!(
            tracing::Level::TRACE,
            operation = "seal",
            routes = table.route_count() as u64,
            max_depth = table.max_depth() as u64
        );
        guard.readonly = Some(Arc::new(table));
    }

    pub fn is_sealed(&self) -> bool {
        self.inner.read().readonly.is_some()
    }

    pub fn find(&self, path: &str, method: impl MethodToken) -> RouterResult<MatchOutcome<H>>
    where
        H: Clone,
    {
        let snapshot = self.readonly().map_err(|_| RouterError::FindWhileMutable)?;
        Ok(snapshot.match_route(path, method)?)
    }

    pub fn readonly(&self) -> RouterResult<Arc<RouteTable<H>>> {
        let guard = self.inner.read();

        match guard.readonly.as_ref() {
            Some(ro) => Ok(Arc::clone(ro)),
            None => Err(RouterError::ReadOnlyUnavailable),
        }
    }

    /// Swaps in a fully built table. Readers holding the previous snapshot
    /// keep it until they drop their `Arc`.
    pub fn reload(&self, table: RouteTable<H>) -> Option<Arc<RouteTable<H>>> {
        let mut guard = self.inner.write();
        tracing::event!(
            tracing::Level::TRACE,
            operation = "reload",
            routes = table.route_count() as u64
        );
        guard.readonly.replace(Arc::new(table))
    }
}

impl<H> Default for Router<H> {
    fn default() -> Self {
        Self::new(None)
    }
}
