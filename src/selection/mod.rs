pub mod anchors;
pub mod config;
pub mod governorates;
pub mod offices;
pub mod sampling;

use rand::Rng;
use tracing::debug;

use crate::cache::{Clock, KeyValueStore, SelectionCache, SystemClock};
use crate::types::{Directory, FeaturedOffice};
pub use anchors::Anchors;
pub use config::SelectionConfig;
pub use governorates::pick_governorates;
pub use offices::pick_offices;
pub use sampling::sample;

/// Featured governorates and offices, stable for one TTL window.
///
/// Each selection kind has its own cache key. Within the window every call
/// returns the stored result; after it, the next call recomputes and
/// overwrites. Nothing here returns an error.
#[derive(Debug)]
pub struct FeaturedSelector<S, C = SystemClock> {
	cache: SelectionCache<S, C>,
	config: SelectionConfig,
}

impl<S: KeyValueStore> FeaturedSelector<S, SystemClock> {
	pub fn new(store: S) -> Self {
		Self::with_config(store, SystemClock, SelectionConfig::v1())
	}
}

impl<S, C> FeaturedSelector<S, C>
where
	S: KeyValueStore,
	C: Clock,
{
	pub fn with_config(store: S, clock: C, config: SelectionConfig) -> Self {
		let cache = SelectionCache::with_clock(store, clock, config.ttl());
		Self { cache, config }
	}

	pub fn config(&self) -> &SelectionConfig {
		&self.config
	}

	pub fn cache(&self) -> &SelectionCache<S, C> {
		&self.cache
	}

	pub fn cache_mut(&mut self) -> &mut SelectionCache<S, C> {
		&mut self.cache
	}

	pub fn into_store(self) -> S {
		self.cache.into_store()
	}

	pub fn select_governorates(&mut self, directory: &Directory) -> Vec<String> {
		self.select_governorates_with(directory, &mut rand::rng())
	}

	pub fn select_governorates_with<R>(&mut self, directory: &Directory, rng: &mut R) -> Vec<String>
	where
		R: Rng + ?Sized,
	{
		// An empty directory never touches the cache.
		if directory.is_empty() {
			debug!("empty directory, no featured governorates");
			return Vec::new();
		}

		let config = &self.config;
		self.cache.get_or_compute(&config.governorates_key, || {
			pick_governorates(directory, config, rng)
		})
	}

	pub fn select_offices(&mut self, directory: &Directory) -> Vec<FeaturedOffice> {
		self.select_offices_with(directory, &mut rand::rng())
	}

	pub fn select_offices_with<R>(&mut self, directory: &Directory, rng: &mut R) -> Vec<FeaturedOffice>
	where
		R: Rng + ?Sized,
	{
		if directory.is_empty() {
			debug!("empty directory, no featured offices");
			return Vec::new();
		}

		let config = &self.config;
		self.cache.get_or_compute(&config.offices_key, || {
			pick_offices(directory, config, rng)
		})
	}
}
