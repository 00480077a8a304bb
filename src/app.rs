use crate::{
    display::{RepositoryPanel, RepositoryRow},
    github::{responses::Repository, GhClient},
    storage::Storage,
    RepositoryId,
};
use anyhow::Error;
use async_trait::async_trait;
use tracing::debug;

/// Resolves a search query to a repository on the remote host.
#[async_trait]
pub trait Lookup {
    async fn lookup(&self, query: &str) -> Result<Repository, Error>;
}

#[async_trait]
impl Lookup for GhClient {
    async fn lookup(&self, query: &str) -> Result<Repository, Error> {
        let repo = self.get_repository(query).await?;
        Ok(repo)
    }
}

/// The two user-visible search failures.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum SearchError {
    #[error("Enter the owner/name of the repository.")]
    EmptyQuery,

    #[error("Error searching for that repository.")]
    Lookup,
}

/// Holds the dashboard repository list and the seams it is built against.
///
/// The list is loaded from storage once, at construction, and written back
/// in full after every append.
#[derive(Debug)]
pub struct App<S, L> {
    storage: S,
    client: L,
    repositories: Vec<Repository>,
}

impl<S, L> App<S, L>
where
    S: Storage,
    L: Lookup,
{
    pub fn new(storage: S, client: L) -> Result<Self, Error> {
        let repositories = storage.load()?;
        debug!(count = repositories.len(), "loaded repositories");
        let s = Self { storage, client, repositories };
        Ok(s)
    }

    /// Searches a repository by query and appends the hit to the dashboard.
    ///
    /// An empty query never reaches the network. A failed lookup leaves the
    /// list and its persisted copy untouched.
    #[tracing::instrument(skip(self))]
    pub async fn search(&mut self, query: &str) -> Result<(), Error> {
        if query.is_empty() {
            return Err(SearchError::EmptyQuery.into());
        }
        let repository = match self.client.lookup(query).await {
            Ok(x) => x,
            Err(err) => {
                debug!(?err, "repository lookup failed");
                return Err(SearchError::Lookup.into());
            }
        };
        self.repositories.push(repository);
        self.storage.save(&self.repositories)?;
        if let Some(repository) = self.repositories.last() {
            println!("{}", RepositoryRow(repository));
        }
        Ok(())
    }

    /// Prints the dashboard, one row per stored repository.
    pub fn list(&self) {
        for repository in &self.repositories {
            println!("{}", RepositoryRow(repository));
        }
    }

    /// Prints the detail panel of a previously searched repository.
    pub fn show(&self, repo_id: &RepositoryId) -> Result<(), Error> {
        let full_name = repo_id.to_string();
        let repository = self
            .repositories
            .iter()
            .find(|x| x.full_name == full_name)
            .ok_or_else(|| {
                Error::msg(format!("Repository {repo_id} has not been searched yet."))
            })?;
        println!("{}", RepositoryPanel(repository));
        Ok(())
    }

    pub fn repositories(&self) -> &[Repository] {
        &self.repositories
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::responses::RepositoryOwner;
    use anyhow::bail;
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    };

    fn repository(full_name: &str) -> Repository {
        let owner = full_name.split('/').next().unwrap();
        Repository {
            full_name: full_name.to_owned(),
            description: Some("A repository.".to_owned()),
            owner: RepositoryOwner {
                login: owner.to_owned(),
                avatar_url: format!("https://example.com/{owner}.png"),
            },
        }
    }

    struct MemoryStorage(Arc<Mutex<Vec<Repository>>>);

    impl Storage for MemoryStorage {
        fn load(&self) -> Result<Vec<Repository>, Error> {
            Ok(self.0.lock().unwrap().clone())
        }

        fn save(&self, repositories: &[Repository]) -> Result<(), Error> {
            *self.0.lock().unwrap() = repositories.to_vec();
            Ok(())
        }
    }

    struct FakeLookup {
        calls: Arc<AtomicUsize>,
        found: bool,
    }

    #[async_trait]
    impl Lookup for FakeLookup {
        async fn lookup(&self, query: &str) -> Result<Repository, Error> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.found {
                Ok(repository(query))
            } else {
                bail!("HTTP status client error (404 Not Found)")
            }
        }
    }

    fn fixture(
        stored: Vec<Repository>,
        found: bool,
    ) -> (App<MemoryStorage, FakeLookup>, Arc<Mutex<Vec<Repository>>>, Arc<AtomicUsize>) {
        let saved = Arc::new(Mutex::new(stored));
        let calls = Arc::new(AtomicUsize::new(0));
        let app = App::new(
            MemoryStorage(saved.clone()),
            FakeLookup { calls: calls.clone(), found },
        )
        .unwrap();
        (app, saved, calls)
    }

    #[tokio::test]
    async fn test_empty_query_never_reaches_the_network() {
        let (mut app, saved, calls) = fixture(Vec::new(), true);

        let err = app.search("").await.unwrap_err();

        assert_eq!(err.downcast_ref::<SearchError>(), Some(&SearchError::EmptyQuery));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(app.repositories().is_empty());
        assert!(saved.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_appends_and_writes_through() {
        let (mut app, saved, calls) = fixture(Vec::new(), true);

        app.search("facebook/react").await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(app.repositories(), [repository("facebook/react")]);
        assert_eq!(&*saved.lock().unwrap(), app.repositories());

        // duplicates are permitted
        app.search("facebook/react").await.unwrap();
        assert_eq!(app.repositories().len(), 2);
        assert_eq!(&*saved.lock().unwrap(), app.repositories());
    }

    #[tokio::test]
    async fn test_failed_lookup_changes_nothing() {
        let stored = vec![repository("rust-lang/rust")];
        let (mut app, saved, _) = fixture(stored.clone(), false);

        let err = app.search("no/such").await.unwrap_err();

        assert_eq!(err.downcast_ref::<SearchError>(), Some(&SearchError::Lookup));
        assert_eq!(app.repositories(), stored);
        assert_eq!(*saved.lock().unwrap(), stored);
    }

    #[tokio::test]
    async fn test_search_recovers_after_a_failure() {
        let (mut app, _, _) = fixture(Vec::new(), true);

        app.search("").await.unwrap_err();
        app.search("facebook/react").await.unwrap();

        assert_eq!(app.repositories().len(), 1);
    }

    #[tokio::test]
    async fn test_loads_persisted_list_without_network() {
        let stored = vec![
            repository("facebook/react"),
            repository("rust-lang/rust"),
            repository("tokio-rs/tokio"),
        ];
        let (app, _, calls) = fixture(stored.clone(), true);

        assert_eq!(app.repositories(), stored);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_show_requires_a_searched_repository() {
        let (app, _, _) = fixture(vec![repository("facebook/react")], true);

        app.show(&RepositoryId::new("facebook", "react")).unwrap();

        let err = app.show(&RepositoryId::new("rust-lang", "rust")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Repository rust-lang/rust has not been searched yet."
        );
    }
}
