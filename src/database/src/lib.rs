pub mod loaders;
pub mod stores;

pub use loaders::{CoachLoader, PlanLoader};
pub use stores::{CoachStore, PlanOverrides, PlanStore, StoreError, StoredActivity};

pub struct DatabaseEntity {
    pub plans: PlanStore,
    pub coaches: CoachStore,
}

pub struct DatabaseLoader;

impl DatabaseLoader {
    pub fn load() -> DatabaseEntity {
        DatabaseEntity {
            plans: PlanStore::new(PlanLoader::load()),
            coaches: CoachStore::new(CoachLoader::load()),
        }
    }
}
