//! Pagination/filter option builder shared by every list endpoint.
//!
//! Translates `page`/`size`/`search` request parameters into SQL fragments:
//! a WHERE clause (active-row filter plus an optional OR-chain of `ILIKE`
//! predicates) and ORDER/LIMIT/OFFSET. The count query and the page query are
//! built from the same WHERE fragment so the reported total always matches
//! the filtered set.

use sqlx::{Postgres, QueryBuilder};

use crate::shared::types::ListQuery;

/// Query-shaping options derived from a [`ListQuery`].
///
/// `like_columns` must be trusted column names (compile-time constants from
/// entity metadata), never request input.
#[derive(Debug)]
pub struct ListOptions<'a> {
    search: Option<&'a str>,
    like_columns: &'static [&'static str],
    limit: i64,
    offset: i64,
}

impl<'a> ListOptions<'a> {
    pub fn new(like_columns: &'static [&'static str], query: &'a ListQuery) -> Self {
        debug_assert!(!like_columns.is_empty());

        Self {
            search: query
                .search
                .as_deref()
                .map(str::trim)
                .filter(|term| !term.is_empty()),
            like_columns,
            limit: query.limit(),
            offset: query.offset(),
        }
    }

    /// Push the WHERE clause. Used by both the count and the page query.
    pub fn push_where(&self, builder: &mut QueryBuilder<'_, Postgres>) {
        builder.push(" WHERE status = TRUE");

        if let Some(term) = self.search {
            let pattern = format!("%{}%", term);
            builder.push(" AND (");
            for (i, column) in self.like_columns.iter().enumerate() {
                if i > 0 {
                    builder.push(" OR ");
                }
                builder.push(*column);
                builder.push(" ILIKE ");
                builder.push_bind(pattern.clone());
            }
            builder.push(")");
        }
    }

    /// Push ORDER BY and the LIMIT/OFFSET window. Page queries only.
    pub fn push_page(&self, builder: &mut QueryBuilder<'_, Postgres>) {
        builder.push(" ORDER BY created_at DESC LIMIT ");
        builder.push_bind(self.limit);
        builder.push(" OFFSET ");
        builder.push_bind(self.offset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(page: i64, size: i64, search: Option<&str>) -> ListQuery {
        ListQuery {
            page,
            size,
            search: search.map(String::from),
        }
    }

    #[test]
    fn where_clause_without_search_only_filters_active_rows() {
        let query = query(1, 10, None);
        let options = ListOptions::new(&["name", "slug"], &query);

        let mut builder = QueryBuilder::new("SELECT * FROM articles");
        options.push_where(&mut builder);

        assert_eq!(builder.sql(), "SELECT * FROM articles WHERE status = TRUE");
    }

    #[test]
    fn search_produces_ilike_chain_over_configured_columns() {
        let query = query(1, 10, Some("rust"));
        let options = ListOptions::new(&["name", "slug"], &query);

        let mut builder = QueryBuilder::new("SELECT * FROM articles");
        options.push_where(&mut builder);

        assert_eq!(
            builder.sql(),
            "SELECT * FROM articles WHERE status = TRUE AND (name ILIKE $1 OR slug ILIKE $2)"
        );
    }

    #[test]
    fn blank_search_is_ignored() {
        let query = query(1, 10, Some("   "));
        let options = ListOptions::new(&["name"], &query);

        let mut builder = QueryBuilder::new("SELECT COUNT(*) FROM articles");
        options.push_where(&mut builder);

        assert_eq!(
            builder.sql(),
            "SELECT COUNT(*) FROM articles WHERE status = TRUE"
        );
    }

    #[test]
    fn count_and_page_queries_share_the_where_clause() {
        let query = query(2, 25, Some("post"));
        let options = ListOptions::new(&["name", "slug"], &query);

        let mut count = QueryBuilder::new("SELECT COUNT(*) FROM articles");
        options.push_where(&mut count);

        let mut page = QueryBuilder::new("SELECT name FROM articles");
        options.push_where(&mut page);
        options.push_page(&mut page);

        let count_where = count.sql().replace("SELECT COUNT(*) FROM articles", "");
        assert!(page.sql().contains(&count_where));
        assert!(page
            .sql()
            .ends_with(" ORDER BY created_at DESC LIMIT $3 OFFSET $4"));
    }
}
