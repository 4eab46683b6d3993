//
//  starr
//  api/readarr/book.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Book resources.
//!
//! A book groups one or more editions; exactly one edition is usually
//! `monitored`. Adding a book requires its author and at least one edition.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Author, Readarr};
use crate::api::client::{Apier, ApierExt};
use crate::api::common::{Image, Ratings, Result};
use crate::api::request::Request;

const BP_BOOK: &str = "v1/book";

/// A book.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub series_title: String,
    pub disambiguation: String,
    pub overview: String,
    pub author_id: i64,
    pub foreign_book_id: String,
    pub title_slug: String,
    pub monitored: bool,
    pub any_edition_ok: bool,
    pub ratings: Ratings,
    pub release_date: Option<DateTime<Utc>>,
    pub page_count: i64,
    pub genres: Vec<String>,
    pub images: Vec<Image>,
    pub editions: Vec<Edition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<BookStatistics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_options: Option<AddBookOptions>,
}

/// One edition of a book.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Edition {
    pub id: i64,
    pub book_id: i64,
    pub foreign_edition_id: String,
    pub title_slug: String,
    pub isbn13: String,
    pub asin: String,
    pub title: String,
    pub language: String,
    pub overview: String,
    pub format: String,
    pub is_ebook: bool,
    pub publisher: String,
    pub page_count: i64,
    pub release_date: Option<DateTime<Utc>>,
    pub images: Vec<Image>,
    pub monitored: bool,
    pub manual_add: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookStatistics {
    pub book_file_count: i64,
    pub book_count: i64,
    pub total_book_count: i64,
    pub size_on_disk: i64,
    pub percent_of_books: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddBookOptions {
    pub search_for_new_book: bool,
}

impl Readarr {
    /// Lists books, optionally only the one whose slug (its GoodReads ID) is `title_slug`.
    pub async fn get_book(&self, title_slug: Option<&str>) -> Result<Vec<Book>> {
        let mut req = Request::new(BP_BOOK);
        if let Some(slug) = title_slug {
            req = req.with_param("titleSlug", slug);
        }
        self.api.get_into(req).await
    }

    pub async fn get_book_by_id(&self, id: i64) -> Result<Book> {
        self.api
            .get_into(Request::new(format!("{BP_BOOK}/{id}")))
            .await
    }

    pub async fn lookup_book(&self, term: &str) -> Result<Vec<Book>> {
        let req = Request::new(format!("{BP_BOOK}/lookup")).with_param("term", term);
        self.api.get_into(req).await
    }

    /// Adds a book. Readarr adds the author too when it is not yet known.
    pub async fn add_book(&self, book: &Book) -> Result<Book> {
        let req = Request::new(BP_BOOK)
            .with_param("moveFiles", true)
            .with_json(book)?;
        self.api.post_into(req).await
    }

    pub async fn update_book(&self, book: &Book, move_files: bool) -> Result<Book> {
        let req = Request::new(format!("{BP_BOOK}/{}", book.id))
            .with_param("moveFiles", move_files)
            .with_json(book)?;
        self.api.put_into(req).await
    }

    pub async fn delete_book(&self, id: i64, delete_files: bool, add_import_list_exclusion: bool) -> Result<()> {
        let req = Request::new(format!("{BP_BOOK}/{id}"))
            .with_param("deleteFiles", delete_files)
            .with_param("addImportListExclusion", add_import_list_exclusion);
        self.api.delete_any(req).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_with_editions_decodes() {
        let json = r#"{
            "id": 4, "title": "Dune", "authorId": 2, "foreignBookId": "234225",
            "releaseDate": "1965-08-01T00:00:00Z",
            "editions": [
                {"id": 10, "bookId": 4, "isbn13": "9780441013593", "monitored": true},
                {"id": 11, "bookId": 4, "isEbook": true}
            ]
        }"#;
        let book: Book = serde_json::from_str(json).unwrap();
        assert_eq!(book.editions.len(), 2);
        assert!(book.editions[0].monitored);
        assert!(book.editions[1].is_ebook);
        assert!(book.author.is_none());
    }
}
