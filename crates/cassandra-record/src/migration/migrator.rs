use super::{CqlMigration, Migration, SchemaMigration};
use crate::{Db, Model, Record, Result};

use cassandra_record_core::{row, Error};

use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
    path::Path,
};

/// Applies migrations in version order and records each applied version in
/// `schema_migrations`.
///
/// Runs are not transactional: when a migration fails the run stops, and
/// versions applied before it stay applied and recorded.
#[derive(Default)]
pub struct Migrator {
    migrations: BTreeMap<u64, Entry>,
}

struct Entry {
    name: String,
    migration: Box<dyn Migration>,
}

impl Migrator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `<version>_<name>.up.cql` files, with optional matching
    /// `.down.cql` files, from `dir`. Other files are ignored.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let mut files: BTreeMap<u64, (String, Option<std::path::PathBuf>, Option<std::path::PathBuf>)> =
            BTreeMap::new();

        let entries = std::fs::read_dir(dir).map_err(|err| {
            Error::from(err).context(Error::migration(format!("can't read {}", dir.display())))
        })?;

        for entry in entries {
            let path = entry?.path();
            let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
                continue;
            };

            let (stem, up) = if let Some(stem) = file_name.strip_suffix(".up.cql") {
                (stem, true)
            } else if let Some(stem) = file_name.strip_suffix(".down.cql") {
                (stem, false)
            } else {
                continue;
            };

            let Some((version, name)) = parse_stem(stem) else {
                continue;
            };

            let slot = files
                .entry(version)
                .or_insert_with(|| (name.to_string(), None, None));

            if slot.0 != name {
                return Err(Error::migration(format!(
                    "version {version} is used by both `{}` and `{name}`",
                    slot.0
                )));
            }

            if up {
                slot.1 = Some(path.clone());
            } else {
                slot.2 = Some(path.clone());
            }
        }

        let mut migrator = Self::new();

        for (version, (name, up, down)) in files {
            let Some(up) = up else {
                return Err(Error::migration(format!(
                    "{version}_{name}.down.cql has no matching .up.cql"
                )));
            };

            let migration = CqlMigration::from_files(up, down.as_deref())?;
            migrator.register(version, name, migration)?;
        }

        Ok(migrator)
    }

    /// Add a migration under `version`.
    pub fn register(
        &mut self,
        version: u64,
        name: impl Into<String>,
        migration: impl Migration + 'static,
    ) -> Result<()> {
        if self.migrations.contains_key(&version) {
            return Err(Error::migration(format!(
                "version {version} is already registered"
            )));
        }

        self.migrations.insert(
            version,
            Entry {
                name: name.into(),
                migration: Box::new(migration),
            },
        );

        Ok(())
    }

    /// Known versions, ascending.
    pub fn versions(&self) -> impl Iterator<Item = u64> + '_ {
        self.migrations.keys().copied()
    }

    /// Versions recorded in `schema_migrations`.
    pub async fn applied(&self, db: &Db) -> Result<BTreeSet<u64>> {
        let records: Vec<Record<SchemaMigration>> =
            SchemaMigration::all().find_each(db).collect().await?;

        let mut applied = BTreeSet::new();

        for record in records {
            let Some(version) = record.get_as::<String>("version")? else {
                continue;
            };

            let version = version.parse().map_err(|_| {
                Error::migration(format!("`{version}` in schema_migrations is not a version"))
            })?;

            applied.insert(version);
        }

        Ok(applied)
    }

    /// Known versions that are not applied yet, ascending.
    pub async fn pending(&self, db: &Db) -> Result<Vec<u64>> {
        let applied = self.applied(db).await?;

        Ok(self
            .versions()
            .filter(|version| !applied.contains(version))
            .collect())
    }

    /// Apply every pending migration in ascending version order. Returns the
    /// versions applied by this call.
    pub async fn migrate(&self, db: &Db) -> Result<Vec<u64>> {
        let pending = self.pending(db).await?;

        for version in &pending {
            self.up(db, *version).await?;
        }

        Ok(pending)
    }

    /// Run one migration's `up` and record its version.
    pub async fn up(&self, db: &Db, version: u64) -> Result<()> {
        let entry = self.entry(version)?;

        tracing::info!(version, name = %entry.name, "migrating up");

        entry
            .migration
            .up(db)
            .await
            .map_err(|err| err.context(failed(version, &entry.name)))?;

        SchemaMigration::create_strict(db, row! { "version" => version.to_string() }).await?;

        Ok(())
    }

    /// Run one migration's `down` and remove its version record.
    pub async fn down(&self, db: &Db, version: u64) -> Result<()> {
        let entry = self.entry(version)?;

        tracing::info!(version, name = %entry.name, "migrating down");

        entry
            .migration
            .down(db)
            .await
            .map_err(|err| err.context(failed(version, &entry.name)))?;

        SchemaMigration::filter("version", version.to_string())
            .delete_all(db)
            .await
    }

    /// Roll back the highest applied version, if any.
    pub async fn rollback(&self, db: &Db) -> Result<Option<u64>> {
        let Some(version) = self.applied(db).await?.last().copied() else {
            return Ok(None);
        };

        self.down(db, version).await?;
        Ok(Some(version))
    }

    fn entry(&self, version: u64) -> Result<&Entry> {
        self.migrations
            .get(&version)
            .ok_or_else(|| Error::migration(format!("no migration with version {version}")))
    }
}

impl fmt::Debug for Migrator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.migrations.iter().map(|(version, entry)| (version, &entry.name)))
            .finish()
    }
}

fn failed(version: u64, name: &str) -> Error {
    Error::migration(format!("{version}_{name} failed"))
}

/// `"20161101_create_users"` -> `(20161101, "create_users")`
fn parse_stem(stem: &str) -> Option<(u64, &str)> {
    let (version, name) = stem.split_once('_')?;

    if version.is_empty() || !version.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    Some((version.parse().ok()?, name))
}
