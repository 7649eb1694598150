//! Bug repositories over the three backing stores.
//!
//! Every backend implements [`BugRepository`], so migration and cleanup code
//! can fetch or delete a bug without caring where it lives:
//!
//! ```rust,ignore
//! use bugrepo::repo::{open_repository, Backend};
//!
//! let repo = open_repository(Backend::Lily, &config)?;
//! if let Some(bug) = repo.get(42)? {
//!     println!("{:?}", bug.get("summary"));
//! }
//! repo.delete(42)?;
//! ```

pub mod bzapi;
pub mod lily;
pub mod solr;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{BugError, Result};
use crate::record::{Bug, BugId};
use crate::transport::HttpTransport;

pub use bzapi::BzapiRepo;
pub use lily::LilyRepo;
pub use solr::SolrRepo;

/// Fetch/delete contract shared by every backend.
pub trait BugRepository {
    /// Short backend name used in logs and errors.
    fn name(&self) -> &'static str;

    /// Fetch the current state of a bug.
    ///
    /// A bug the backend does not know is `Ok(None)`; only transport and
    /// schema failures are errors.
    fn get(&self, bug_id: BugId) -> Result<Option<Bug>>;

    /// Remove a bug and everything derived from it.
    ///
    /// Read-only backends return [`BugError::Unsupported`].
    fn delete(&self, bug_id: BugId) -> Result<()>;
}

impl<R: BugRepository + ?Sized> BugRepository for Box<R> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn get(&self, bug_id: BugId) -> Result<Option<Bug>> {
        (**self).get(bug_id)
    }

    fn delete(&self, bug_id: BugId) -> Result<()> {
        (**self).delete(bug_id)
    }
}

/// The backing stores a bug can live in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// REST bug tracker API
    Bzapi,
    /// Versioned document store
    Lily,
    /// Search index
    Solr,
}

impl Backend {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bzapi => "bzapi",
            Self::Lily => "lily",
            Self::Solr => "solr",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Backend {
    type Err = BugError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "bzapi" => Ok(Self::Bzapi),
            "lily" => Ok(Self::Lily),
            "solr" => Ok(Self::Solr),
            other => Err(BugError::Config(format!(
                "unknown backend {other} (expected bzapi|lily|solr)"
            ))),
        }
    }
}

/// Build the repository for `backend` over a fresh HTTP transport.
pub fn open_repository(backend: Backend, config: &Config) -> Result<Box<dyn BugRepository>> {
    Ok(match backend {
        Backend::Bzapi => Box::new(BzapiRepo::new(HttpTransport::new(
            &config.bzapi.base_url,
            &config.http,
        )?)),
        Backend::Lily => Box::new(LilyRepo::new(HttpTransport::new(
            &config.lily.base_url,
            &config.http,
        )?)),
        Backend::Solr => Box::new(SolrRepo::new(HttpTransport::new(
            &config.solr.base_url,
            &config.http,
        )?)),
    })
}
