use crate::{Inventory, MemStore, StoreResult, io_error};
use lot_types::{Spot, SpotId, SpotType, Vehicle, VehicleCategory, VehicleId};
use std::{
    fs::{self, File, OpenOptions},
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

/// Filesystem-backed inventory persisted at `<root>/.lot/inventory.json`.
///
/// The full inventory is held in memory and rewritten after every mutation.
/// An exclusive lock on `<root>/.lot/inventory.lock` is held from `open`
/// until the store is dropped, so only one process at a time reads and
/// writes the inventory.
#[derive(Debug)]
pub struct FsStore {
    path: PathBuf,
    inner: MemStore,
    _lock: File,
}

impl FsStore {
    pub const DIR: &'static str = ".lot";
    pub const FILE: &'static str = "inventory.json";
    pub const LOCK_FILE: &'static str = "inventory.lock";

    /// Opens the inventory under `root`, waiting for any other process that
    /// holds it to let go.
    pub fn open(root: impl AsRef<Path>) -> StoreResult<Self> {
        let dir = root.as_ref().join(Self::DIR);
        fs::create_dir_all(&dir).map_err(|e| io_error(&dir, e))?;

        let lock_path = dir.join(Self::LOCK_FILE);
        let lock = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)
            .map_err(|e| io_error(&lock_path, e))?;
        lock.lock().map_err(|e| io_error(&lock_path, e))?;

        let path = dir.join(Self::FILE);
        let inner = match fs::read(&path) {
            Ok(bytes) => {
                let store: MemStore = serde_json::from_slice(&bytes)?;
                store.validate()?;
                store
            }
            Err(err) if err.kind() == ErrorKind::NotFound => MemStore::new(),
            Err(err) => return Err(io_error(&path, err)),
        };
        Ok(Self {
            path,
            inner,
            _lock: lock,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> StoreResult<()> {
        let bytes = serde_json::to_vec_pretty(&self.inner)?;
        let tmp = self.path.with_extension("json.tmp");
        let mut file = File::create(&tmp).map_err(|e| io_error(&tmp, e))?;
        file.write_all(&bytes).map_err(|e| io_error(&tmp, e))?;
        file.sync_all().map_err(|e| io_error(&tmp, e))?;
        fs::rename(&tmp, &self.path).map_err(|e| io_error(&self.path, e))?;
        Ok(())
    }

    /// Applies `op` to the in-memory inventory and persists it. The in-memory
    /// state is put back when either step fails.
    fn mutate<T>(&mut self, op: impl FnOnce(&mut MemStore) -> StoreResult<T>) -> StoreResult<T> {
        let before = self.inner.clone();
        let out = op(&mut self.inner)?;
        if let Err(err) = self.persist() {
            self.inner = before;
            return Err(err);
        }
        Ok(out)
    }
}

impl Inventory for FsStore {
    fn insert_spots(&mut self, spot_type: SpotType, count: u32) -> StoreResult<Vec<SpotId>> {
        self.mutate(|inner| inner.insert_spots(spot_type, count))
    }

    fn total_spots(&self, spot_type: SpotType) -> StoreResult<u64> {
        self.inner.total_spots(spot_type)
    }

    fn free_spots_of_type(&self, spot_type: SpotType) -> StoreResult<Vec<Spot>> {
        self.inner.free_spots_of_type(spot_type)
    }

    fn count_free(&self, spot_type: SpotType) -> StoreResult<u64> {
        self.inner.count_free(spot_type)
    }

    fn spots_held_by(&self, vehicle: VehicleId) -> StoreResult<Vec<Spot>> {
        self.inner.spots_held_by(vehicle)
    }

    fn assign(&mut self, spots: &[SpotId], vehicle: VehicleId) -> StoreResult<()> {
        self.mutate(|inner| inner.assign(spots, vehicle))
    }

    fn release(&mut self, spots: &[SpotId]) -> StoreResult<()> {
        self.mutate(|inner| inner.release(spots))
    }

    fn create_vehicle(&mut self, category: VehicleCategory) -> StoreResult<Vehicle> {
        self.mutate(|inner| inner.create_vehicle(category))
    }

    fn vehicle(&self, id: VehicleId) -> StoreResult<Option<Vehicle>> {
        self.inner.vehicle(id)
    }

    fn delete_vehicle(&mut self, id: VehicleId) -> StoreResult<bool> {
        if self.inner.vehicle(id)?.is_none() {
            return Ok(false);
        }
        self.mutate(|inner| inner.delete_vehicle(id))
    }

    fn vehicles(&self) -> StoreResult<Vec<Vehicle>> {
        self.inner.vehicles()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StoreError;
    use tempfile::TempDir;

    #[test]
    fn missing_file_opens_empty() {
        let dir = TempDir::new().expect("tmp");
        let store = FsStore::open(dir.path()).expect("open");
        assert_eq!(store.total_spots(SpotType::Regular).unwrap(), 0);
        assert!(store.vehicles().unwrap().is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn state_survives_reopen() {
        let dir = TempDir::new().expect("tmp");
        let vehicle = {
            let mut store = FsStore::open(dir.path()).expect("open");
            store.insert_spots(SpotType::Regular, 3).expect("seed");
            let vehicle = store.create_vehicle(VehicleCategory::Van).expect("vehicle");
            store
                .assign(&[SpotId(1), SpotId(2), SpotId(3)], vehicle.id)
                .expect("assign");
            vehicle
        };

        let mut store = FsStore::open(dir.path()).expect("reopen");
        assert_eq!(store.count_free(SpotType::Regular).unwrap(), 0);
        assert_eq!(store.vehicle(vehicle.id).unwrap(), Some(vehicle));
        assert_eq!(store.spots_held_by(vehicle.id).unwrap().len(), 3);

        let next = store.create_vehicle(VehicleCategory::Car).expect("next");
        assert!(next.id > vehicle.id);
    }

    #[test]
    fn failed_write_leaves_inventory_unchanged() {
        let dir = TempDir::new().expect("tmp");
        let mut store = FsStore::open(dir.path()).expect("open");
        store.insert_spots(SpotType::Regular, 3).expect("seed");
        let parked = store.create_vehicle(VehicleCategory::Van).expect("vehicle");
        store
            .assign(&[SpotId(1), SpotId(2), SpotId(3)], parked.id)
            .expect("assign");
        let on_disk = std::fs::read(store.path()).expect("read");

        // a directory where the temp file goes makes every write fail
        std::fs::create_dir(store.path().with_extension("json.tmp")).expect("block writes");

        let err = store
            .create_vehicle(VehicleCategory::Car)
            .expect_err("write fails");
        assert!(matches!(err, StoreError::Io { .. }), "unexpected error: {err:?}");
        assert_eq!(store.vehicles().unwrap(), vec![parked]);

        assert!(store.release(&[SpotId(1), SpotId(2), SpotId(3)]).is_err());
        assert_eq!(store.count_free(SpotType::Regular).unwrap(), 0);
        assert_eq!(store.spots_held_by(parked.id).unwrap().len(), 3);

        assert!(store.delete_vehicle(parked.id).is_err());
        assert_eq!(store.vehicle(parked.id).unwrap(), Some(parked));
        assert_eq!(std::fs::read(store.path()).expect("read"), on_disk);
    }

    #[test]
    fn open_store_holds_exclusive_lock() {
        let dir = TempDir::new().expect("tmp");
        let store = FsStore::open(dir.path()).expect("open");
        let lock_path = dir.path().join(FsStore::DIR).join(FsStore::LOCK_FILE);

        let other = std::fs::File::open(&lock_path).expect("lock file");
        assert!(other.try_lock().is_err(), "lock should be held");

        drop(store);
        other.try_lock().expect("lock released on drop");
    }

    #[test]
    fn corrupt_file_is_rejected() {
        let dir = TempDir::new().expect("tmp");
        let path = {
            let mut store = FsStore::open(dir.path()).expect("open");
            store.insert_spots(SpotType::Compact, 1).expect("seed");
            store.path().to_path_buf()
        };
        std::fs::write(&path, b"{ not json").expect("tamper");
        let err = FsStore::open(dir.path()).expect_err("should fail");
        assert!(matches!(err, StoreError::Json(_)), "unexpected error: {err:?}");
    }
}
