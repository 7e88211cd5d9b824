//! Starship import job.
//!
//! Pages through a remote paginated feed and upserts every record into the catalog. Each
//! page is parsed completely before anything is written, then stored inside its own
//! transaction: a bad page aborts the run without touching the catalog, while pages stored
//! before it stay committed. Listings are never touched.

pub mod feed;

#[cfg(test)]
mod tests;

use std::collections::HashSet;

use reqwest::Url;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::starship::StarshipRepository,
    error::{import::ImportError, Error},
    model::starship::NewStarship,
    service::import::feed::StarshipPage,
};

/// Outcome of an import run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Record count reported by the last page fetched
    pub count: u64,
    /// Number of pages stored
    pub pages: usize,
    /// Rows inserted
    pub created: usize,
    /// Records that matched an existing row
    pub existing: usize,
}

pub struct StarshipImportService<'a> {
    db: &'a DatabaseConnection,
    http_client: &'a reqwest::Client,
}

impl<'a> StarshipImportService<'a> {
    pub fn new(db: &'a DatabaseConnection, http_client: &'a reqwest::Client) -> Self {
        Self { db, http_client }
    }

    /// Imports every page of the feed starting at `endpoint`.
    ///
    /// Pages are followed through `next` until it is null. Relative `next` links are
    /// resolved against the page they came from.
    ///
    /// # Returns
    /// - `Ok(ImportSummary)` - Every page was stored
    /// - `Err(Error::ImportError)` - Invalid endpoint, HTTP failure, or malformed page
    /// - `Err(Error::DbErr)` - Storing a page failed
    pub async fn import_starships(&self, endpoint: &str) -> Result<ImportSummary, Error> {
        let mut next = Some(parse_endpoint(endpoint)?);
        let mut visited = HashSet::new();
        let mut summary = ImportSummary::default();

        while let Some(url) = next {
            if !visited.insert(url.clone()) {
                return Err(ImportError::PageCycle(url.to_string()).into());
            }

            let page = self.fetch_page(&url).await?;

            let starships = page
                .results
                .iter()
                .map(NewStarship::try_from)
                .collect::<Result<Vec<_>, _>>()?;

            let (created, existing) = self.store_page(starships).await?;

            summary.count = page.count;
            summary.pages += 1;
            summary.created += created;
            summary.existing += existing;

            tracing::info!(
                "Stored starship feed page {} ({} new, {} existing)",
                url,
                created,
                existing
            );

            next = match page.next {
                Some(next) => Some(url.join(&next).map_err(|e| ImportError::InvalidResponse {
                    endpoint: url.to_string(),
                    reason: format!("invalid next page link {next:?}: {e}"),
                })?),
                None => None,
            };
        }

        Ok(summary)
    }

    async fn fetch_page(&self, url: &Url) -> Result<StarshipPage, Error> {
        tracing::debug!("Fetching starship feed page {}", url);

        let response = self
            .http_client
            .get(url.clone())
            .send()
            .await
            .map_err(ImportError::from)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ImportError::UpstreamStatus {
                endpoint: url.to_string(),
                status: status.as_u16(),
            }
            .into());
        }

        let body = response.text().await.map_err(ImportError::from)?;

        let page = serde_json::from_str::<StarshipPage>(&body).map_err(|e| {
            ImportError::InvalidResponse {
                endpoint: url.to_string(),
                reason: e.to_string(),
            }
        })?;

        Ok(page)
    }

    /// Upserts one page inside a single transaction, returning (created, existing) counts
    async fn store_page(&self, starships: Vec<NewStarship>) -> Result<(usize, usize), Error> {
        let txn = self.db.begin().await?;
        let starship_repo = StarshipRepository::new(&txn);

        let mut created = 0;
        let mut existing = 0;

        for starship in starships {
            match starship_repo.upsert(starship).await? {
                (_, true) => created += 1,
                (_, false) => existing += 1,
            }
        }

        txn.commit().await?;

        Ok((created, existing))
    }
}

fn parse_endpoint(endpoint: &str) -> Result<Url, ImportError> {
    let invalid = |reason: String| ImportError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        reason,
    };

    let url = Url::parse(endpoint).map_err(|e| invalid(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(invalid(format!("unsupported scheme {scheme:?}"))),
    }
}
