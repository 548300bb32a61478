//! Fixtures
//!
//! Loads listing data from YAML files laid out as `<base>/listings/<set>.yml`.

use std::{fs, path::PathBuf};

use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::debug;

use crate::{fixtures::listings::ListingsFixture, listings::Listing};

pub mod listings;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Listing not found
    #[error("Listing not found: {0}")]
    ListingNotFound(String),

    /// Same listing id defined by two fixture files
    #[error("Duplicate listing: {0}")]
    DuplicateListing(String),
}

/// Fixture
#[derive(Debug)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,

    /// Listings keyed by id
    listings: FxHashMap<String, Listing>,
}

impl Fixture {
    /// Create a new empty fixture with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            listings: FxHashMap::default(),
        }
    }

    /// Load listings from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if it
    /// redefines a listing that is already loaded. Nothing from a rejected
    /// file is kept.
    pub fn load_listings(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("listings").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: ListingsFixture = serde_norway::from_str(&contents)?;

        if let Some(id) = fixture
            .listings
            .keys()
            .filter(|id| self.listings.contains_key(*id))
            .min()
        {
            return Err(FixtureError::DuplicateListing(id.clone()));
        }

        for (id, listing_fixture) in fixture.listings {
            let listing = listing_fixture.into_listing(id.clone());
            self.listings.insert(id, listing);
        }

        debug!(
            path = %file_path.display(),
            listings = self.listings.len(),
            "loaded listing fixture"
        );

        Ok(self)
    }

    /// Load a fixture set from the default base path
    ///
    /// # Errors
    ///
    /// Returns an error if the listing file cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::new();

        fixture.load_listings(name)?;

        Ok(fixture)
    }

    /// Get a listing by its id
    ///
    /// # Errors
    ///
    /// Returns an error if the listing is not found.
    pub fn listing(&self, id: &str) -> Result<&Listing, FixtureError> {
        self.listings
            .get(id)
            .ok_or_else(|| FixtureError::ListingNotFound(id.to_string()))
    }

    /// All loaded listings, ordered by id.
    pub fn listings(&self) -> Vec<&Listing> {
        let mut listings: Vec<&Listing> = self.listings.values().collect();

        listings.sort_by(|a, b| a.id.cmp(&b.id));

        listings
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::fs::{create_dir_all, write};

    use tempfile::TempDir;
    use testresult::TestResult;

    use super::*;

    fn fixture_dir(files: &[(&str, &str)]) -> TestResult<TempDir> {
        let dir = tempfile::tempdir()?;
        let listings_dir = dir.path().join("listings");

        create_dir_all(&listings_dir)?;

        for (name, contents) in files {
            write(listings_dir.join(format!("{name}.yml")), contents)?;
        }

        Ok(dir)
    }

    #[test]
    fn loads_listings_and_finds_by_id() -> TestResult {
        let dir = fixture_dir(&[(
            "bali",
            "listings:\n  villa:\n    name: Villa\n    price: 250\n    unit: night\n",
        )])?;

        let mut fixture = Fixture::with_base_path(dir.path());
        fixture.load_listings("bali")?;

        let villa = fixture.listing("villa")?;

        assert_eq!(villa.id, "villa");
        assert_eq!(villa.price_label(), "Rp 3.750.000/night");

        Ok(())
    }

    #[test]
    fn missing_listing_is_an_error() -> TestResult {
        let dir = fixture_dir(&[("empty", "listings: {}\n")])?;

        let mut fixture = Fixture::with_base_path(dir.path());
        fixture.load_listings("empty")?;

        assert!(matches!(
            fixture.listing("nope"),
            Err(FixtureError::ListingNotFound(id)) if id == "nope"
        ));

        Ok(())
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let mut fixture = Fixture::with_base_path("/definitely/not/here");

        assert!(matches!(
            fixture.load_listings("bali"),
            Err(FixtureError::Io(_))
        ));
    }

    #[test]
    fn malformed_yaml_is_a_parse_error() -> TestResult {
        let dir = fixture_dir(&[("broken", "listings: [not, a, map]\n")])?;

        let mut fixture = Fixture::with_base_path(dir.path());

        assert!(matches!(
            fixture.load_listings("broken"),
            Err(FixtureError::Yaml(_))
        ));

        Ok(())
    }

    #[test]
    fn duplicate_listing_across_sets_is_rejected() -> TestResult {
        let dir = fixture_dir(&[
            ("a", "listings:\n  villa:\n    name: Villa\n"),
            ("b", "listings:\n  villa:\n    name: Other Villa\n"),
        ])?;

        let mut fixture = Fixture::with_base_path(dir.path());
        fixture.load_listings("a")?;

        assert!(matches!(
            fixture.load_listings("b"),
            Err(FixtureError::DuplicateListing(id)) if id == "villa"
        ));

        Ok(())
    }

    #[test]
    fn rejected_set_leaves_loaded_listings_untouched() -> TestResult {
        let clashing: String = (0..20)
            .map(|n| format!("  extra-{n:02}:\n    name: Extra {n}\n"))
            .chain(std::iter::once("  villa:\n    name: Other Villa\n".to_string()))
            .collect();

        let dir = fixture_dir(&[
            ("a", "listings:\n  villa:\n    name: Villa\n"),
            ("b", &format!("listings:\n{clashing}")),
        ])?;

        let mut fixture = Fixture::with_base_path(dir.path());
        fixture.load_listings("a")?;

        assert!(matches!(
            fixture.load_listings("b"),
            Err(FixtureError::DuplicateListing(id)) if id == "villa"
        ));

        assert_eq!(fixture.listings().len(), 1);
        assert_eq!(fixture.listing("villa")?.name, "Villa");
        assert!(fixture.listing("extra-00").is_err());

        Ok(())
    }

    #[test]
    fn listings_are_sorted_by_id() -> TestResult {
        let dir = fixture_dir(&[(
            "many",
            "listings:\n  c:\n    name: C\n  a:\n    name: A\n  b:\n    name: B\n",
        )])?;

        let mut fixture = Fixture::with_base_path(dir.path());
        fixture.load_listings("many")?;

        let listings = fixture.listings();
        let ids: Vec<&str> = listings.iter().map(|listing| listing.id.as_str()).collect();

        assert_eq!(ids, ["a", "b", "c"]);

        Ok(())
    }
}
