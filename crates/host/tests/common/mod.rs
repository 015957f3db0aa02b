//! Common test utilities
#![allow(dead_code)] // Not every test file uses every helper

use std::path::PathBuf;

use anyhow::{Context, Result};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use slide_deck_host::api;
use slide_deck_host::config::SiteConfig;
use tempfile::TempDir;
use tower::ServiceExt;

/// A throwaway site root with `index.html` and a `decks/` directory
pub struct TestSite {
    pub tmp_dir: TempDir,
}

impl TestSite {
    pub fn new() -> Result<Self> {
        let tmp_dir = TempDir::new().context("Failed to create temp directory")?;
        let site = Self { tmp_dir };
        site.write_file("index.html", "<main id=\"main-content\"></main>")?;
        std::fs::create_dir_all(site.path("decks"))?;
        Ok(site)
    }

    /// Get absolute path for file in the site root
    pub fn path(&self, rel_path: &str) -> PathBuf {
        self.tmp_dir.path().join(rel_path)
    }

    /// Write a file to the site root
    pub fn write_file(&self, rel_path: &str, content: &str) -> Result<()> {
        let path = self.path(rel_path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write file: {}", path.display()))
    }

    /// Write `decks/<id>.json`
    pub fn write_deck(&self, id: &str, json: &str) -> Result<()> {
        self.write_file(&format!("decks/{id}.json"), json)
    }

    pub fn app(&self) -> Router {
        api::app(&SiteConfig {
            root: self.tmp_dir.path().to_path_buf(),
        })
    }

    /// Issue a GET against a fresh router, returning status and body text
    pub async fn get(&self, uri: &str) -> (StatusCode, String) {
        let response = self
            .app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8_lossy(&bytes).into_owned())
    }
}

pub const SAMPLE_DECK: &str = r##"{
    "meta": {
        "title": "Detecção de Fraudes",
        "subtitle": "Trabalho de conclusão",
        "authors": ["Ana", "Bruno"],
        "advisor": "Dra. Lima"
    },
    "sections": [
        { "id": "intro", "title": "Introdução", "content": [
            { "type": "text", "value": "Contexto" }
        ]},
        { "id": "resultados", "title": "Resultados", "content": [
            { "type": "chart", "chartId": "acc", "config": { "type": "bar" } },
            { "type": "table", "headers": ["Metric", "Value"], "rows": [["Accuracy", "92%"]] }
        ]}
    ]
}"##;
