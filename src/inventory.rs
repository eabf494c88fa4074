//! Main entry point for stockroom.
//!
//! [`Inventory`] composes a medium, an item backend, the id allocator and the
//! engine's startup sequence, and exposes the derived views over the current
//! collection.

use crate::error::{Error, Result};
use chrono::{Local, NaiveDate};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use stockroom_core::{InventoryItem, ItemId};
use stockroom_engine::{
    startup, EngineConfig, IdAllocator, ItemDraft, ItemStore, MergeSummary, Reconciler,
    StartupReport, Validator,
};
use stockroom_storage::{
    BackendKind, FileMedium, ItemBackend, JsonItemBackend, MemoryMedium, SharedMedium,
    SqliteItemBackend,
};
use stockroom_views::{
    filter_items, recent_activity, search_items, ChartData, ItemFilter, Kpis,
};
use tracing::info;

/// Database file used by the SQLite backend inside the data directory.
pub const SQLITE_FILE: &str = "inventory.db";

/// Config file picked up from the data directory when none is given.
pub const CONFIG_FILE: &str = "stockroom.toml";

/// An open inventory.
///
/// # Example
///
/// ```ignore
/// use stockroom::prelude::*;
///
/// let mut inv = Inventory::open("./stock")?;
///
/// let item = inv.add_item(&ItemDraft::new("Stretch Hood", "Supplies", "4", "12.50", "In Stock"))?;
/// println!("added {}", item.id);
///
/// let kpis = inv.kpis();
/// println!("{} items worth {}", kpis.total_items, format_currency(kpis.total_value));
/// ```
pub struct Inventory {
    store: ItemStore,
    allocator: IdAllocator,
    medium: SharedMedium,
    config: EngineConfig,
    data_dir: Option<PathBuf>,
    report: StartupReport,
}

/// Every dashboard view computed from one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    /// Headline counters
    pub kpis: Kpis,
    /// Newest items first
    pub recent: Vec<InventoryItem>,
    /// Quantity bars
    pub chart: ChartData,
}

impl Inventory {
    /// Open an inventory stored in `path`, creating the directory if needed.
    ///
    /// Uses the JSON backend unless a `stockroom.toml` in the directory says
    /// otherwise.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::builder().path(path).open()
    }

    /// Open an inventory that lives only in memory.
    ///
    /// | Method | Disk files | Survives drop |
    /// |--------|------------|---------------|
    /// | `Inventory::ephemeral()` | None | No |
    /// | `Inventory::open(path)` | `path` | Yes |
    pub fn ephemeral() -> Result<Self> {
        Self::builder().ephemeral().open()
    }

    /// Create a builder for inventory configuration.
    pub fn builder() -> InventoryBuilder {
        InventoryBuilder::new()
    }

    // ===== Mutations =====

    /// Validate `draft` and add it, dated today.
    ///
    /// Returns the stored item with its freshly allocated id.
    pub fn add_item(&mut self, draft: &ItemDraft) -> Result<InventoryItem> {
        self.add_item_on(draft, Local::now().date_naive())
    }

    /// Validate `draft` and add it with an explicit `date_added`.
    pub fn add_item_on(&mut self, draft: &ItemDraft, date: NaiveDate) -> Result<InventoryItem> {
        let new_item = Validator::new(&self.config).validate(draft, &self.store)?;
        let item = new_item.into_item(self.allocator.next(), date);
        info!(id = %item.id, name = %item.name, "item added");
        self.store.insert(item.clone());
        Ok(item)
    }

    /// Remove the item with `id`. Returns `false` if there was none.
    pub fn delete_item(&mut self, id: &str) -> bool {
        let removed = self.store.delete(id);
        if removed {
            info!(id, "item deleted");
        }
        removed
    }

    /// Run the duplicate reconciler again.
    ///
    /// It already ran during open, so this only finds duplicates written
    /// behind the inventory's back and then reloaded.
    pub fn reconcile(&mut self) -> Vec<MergeSummary> {
        Reconciler::run(&mut self.store)
    }

    /// Re-read the collection from storage.
    pub fn reload(&mut self) -> Result<()> {
        self.store.reload().map_err(Error::from)
    }

    /// Retry persisting after a failed write. Returns `true` once durable.
    pub fn flush(&mut self) -> bool {
        self.store.flush()
    }

    // ===== Lookups =====

    /// Item with the given id.
    pub fn get(&self, id: &str) -> Option<&InventoryItem> {
        self.store.get(id)
    }

    /// Item whose name matches ignoring case.
    pub fn find_by_name(&self, name: &str) -> Option<&InventoryItem> {
        self.store.find_by_name(name)
    }

    /// The collection in storage order.
    pub fn items(&self) -> &[InventoryItem] {
        self.store.items()
    }

    /// Snapshot copy of the collection.
    pub fn all(&self) -> Vec<InventoryItem> {
        self.store.all()
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Check if the inventory is empty.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Id the next successful add will receive.
    pub fn peek_next_id(&self) -> ItemId {
        ItemId::new(self.allocator.prefix(), self.allocator.peek())
    }

    // ===== Views =====

    /// Dashboard counters.
    pub fn kpis(&self) -> Kpis {
        Kpis::compute(self.items())
    }

    /// Newest items, up to the configured limit.
    pub fn recent(&self) -> Vec<InventoryItem> {
        self.recent_n(self.config.recent_limit)
    }

    /// Newest `limit` items.
    pub fn recent_n(&self, limit: usize) -> Vec<InventoryItem> {
        recent_activity(self.items(), limit)
    }

    /// Bar chart data.
    pub fn chart(&self) -> ChartData {
        ChartData::build(self.items())
    }

    /// Inventory table rows matching `filter`, newest first.
    pub fn filter(&self, filter: &ItemFilter) -> Vec<InventoryItem> {
        filter_items(self.items(), filter)
    }

    /// Dashboard search results, sorted by name.
    pub fn search(&self, term: &str) -> Vec<InventoryItem> {
        search_items(self.items(), term)
    }

    /// All dashboard views from the current collection.
    pub fn dashboard(&self) -> Dashboard {
        Dashboard {
            kpis: self.kpis(),
            recent: self.recent(),
            chart: self.chart(),
        }
    }

    // ===== State =====

    /// What happened while opening.
    pub fn startup_report(&self) -> &StartupReport {
        &self.report
    }

    /// Groups merged by the reconciler during open.
    pub fn merged_on_open(&self) -> &[MergeSummary] {
        &self.report.merged
    }

    /// True when the last write to storage failed.
    pub fn is_dirty(&self) -> bool {
        self.store.is_dirty()
    }

    /// Active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Backend holding the item collection.
    pub fn backend(&self) -> BackendKind {
        self.store.backend_kind()
    }

    /// Data directory, or `None` for an ephemeral inventory.
    pub fn path(&self) -> Option<&Path> {
        self.data_dir.as_deref()
    }

    /// Check if nothing is written to disk.
    pub fn is_ephemeral(&self) -> bool {
        self.data_dir.is_none()
    }

    /// Medium shared by the backend and the allocator.
    pub fn medium(&self) -> &SharedMedium {
        &self.medium
    }
}

/// Builder for inventory configuration.
///
/// Explicit builder settings override values from the config file.
///
/// # Example
///
/// ```ignore
/// // On disk, relational backend
/// let inv = Inventory::builder()
///     .path("./stock")
///     .backend(BackendKind::Sqlite)
///     .open()?;
///
/// // Tests: in memory, no starter data
/// let inv = Inventory::builder()
///     .ephemeral()
///     .seed_when_empty(false)
///     .open()?;
/// ```
#[derive(Default)]
pub struct InventoryBuilder {
    path: Option<PathBuf>,
    ephemeral: bool,
    config: Option<EngineConfig>,
    config_file: Option<PathBuf>,
    backend: Option<BackendKind>,
    id_prefix: Option<String>,
    seed_when_empty: Option<bool>,
    medium: Option<SharedMedium>,
}

impl InventoryBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the data directory.
    pub fn path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Keep everything in memory, ignoring any path.
    pub fn ephemeral(mut self) -> Self {
        self.ephemeral = true;
        self
    }

    /// Use `config` instead of reading a config file.
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Read configuration from `path`.
    pub fn config_file(mut self, path: impl AsRef<Path>) -> Self {
        self.config_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Choose the item backend.
    pub fn backend(mut self, backend: BackendKind) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Prefix for allocated item codes.
    pub fn id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = Some(prefix.into());
        self
    }

    /// Whether an empty inventory receives the starter data set.
    pub fn seed_when_empty(mut self, seed: bool) -> Self {
        self.seed_when_empty = Some(seed);
        self
    }

    /// Use a caller-supplied medium for the counter, legacy data and the
    /// JSON backend.
    pub fn medium(mut self, medium: SharedMedium) -> Self {
        self.medium = Some(medium);
        self
    }

    /// Open the inventory.
    ///
    /// Without a path (or with [`ephemeral`](Self::ephemeral)) nothing touches
    /// the disk.
    pub fn open(self) -> Result<Inventory> {
        let data_dir = if self.ephemeral { None } else { self.path.clone() };
        let config = self.resolve_config(data_dir.as_deref())?;

        let medium: SharedMedium = match (&self.medium, &data_dir) {
            (Some(medium), _) => medium.clone(),
            (None, Some(dir)) => Arc::new(FileMedium::open(dir)?),
            (None, None) => Arc::new(MemoryMedium::new()),
        };

        let backend: Box<dyn ItemBackend> = match config.backend {
            BackendKind::Json => Box::new(JsonItemBackend::new(medium.clone())),
            BackendKind::Sqlite => match &data_dir {
                Some(dir) => Box::new(SqliteItemBackend::open(dir.join(SQLITE_FILE))?),
                None => Box::new(SqliteItemBackend::open_in_memory()?),
            },
        };

        let mut store = ItemStore::open(backend)?;
        let allocator = IdAllocator::new(medium.clone(), config.id_prefix.clone());
        let report = startup(&mut store, &allocator, medium.as_ref(), &config);

        info!(
            medium = %medium.describe(),
            backend = %config.backend,
            items = store.len(),
            source = ?report.source,
            "inventory opened"
        );

        Ok(Inventory {
            store,
            allocator,
            medium,
            config,
            data_dir,
            report,
        })
    }

    fn resolve_config(&self, data_dir: Option<&Path>) -> Result<EngineConfig> {
        let mut config = match (&self.config, &self.config_file) {
            (Some(config), _) => config.clone(),
            (None, Some(file)) => EngineConfig::load(file)?,
            (None, None) => match data_dir.map(|dir| dir.join(CONFIG_FILE)) {
                Some(file) if file.is_file() => EngineConfig::load(file)?,
                _ => EngineConfig::default(),
            },
        };

        if let Some(backend) = self.backend {
            config.backend = backend;
        }
        if let Some(prefix) = &self.id_prefix {
            config.id_prefix = prefix.clone();
        }
        if let Some(seed) = self.seed_when_empty {
            config.seed_when_empty = seed;
        }
        Ok(config)
    }
}
