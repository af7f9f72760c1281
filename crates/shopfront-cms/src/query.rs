//! GROQ query construction for product documents.

/// Fields projected from each product document.
///
/// Renames flatten references so each record matches [`CmsProduct`]
/// without a second round trip.
///
/// [`CmsProduct`]: crate::record::CmsProduct
pub const PRODUCT_PROJECTION: &[&str] = &[
    r#""id": _id"#,
    "name",
    r#""slug": slug.current"#,
    "price",
    "description",
    r#""category": category->name"#,
    "stock",
    r#""image": image.asset->url"#,
    "featured",
];

/// Sort direction for [`ProductQuery::order_by`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Builder for the product listing query.
///
/// ```rust
/// use shopfront_cms::ProductQuery;
///
/// let query = ProductQuery::new("product").featured_only().to_groq();
/// assert!(query.starts_with(r#"*[_type == "product" && featured == true]"#));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductQuery {
    document_type: String,
    featured_only: bool,
    order: Option<(String, SortOrder)>,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self::new("product")
    }
}

impl ProductQuery {
    pub fn new(document_type: impl Into<String>) -> Self {
        Self {
            document_type: document_type.into(),
            featured_only: false,
            order: None,
        }
    }

    /// Only documents flagged `featured`.
    pub fn featured_only(mut self) -> Self {
        self.featured_only = true;
        self
    }

    /// Ascending order on `field`.
    pub fn order_by(self, field: impl Into<String>) -> Self {
        self.order_by_with(field, SortOrder::Asc)
    }

    pub fn order_by_with(mut self, field: impl Into<String>, order: SortOrder) -> Self {
        self.order = Some((field.into(), order));
        self
    }

    /// Render the query text.
    pub fn to_groq(&self) -> String {
        let mut filter = format!("_type == {}", quote(&self.document_type));
        if self.featured_only {
            filter.push_str(" && featured == true");
        }

        let mut query = format!("*[{}]", filter);
        if let Some((field, order)) = &self.order {
            query.push_str(&format!(" | order({} {})", field, order.as_str()));
        }
        query.push_str(&format!(" {{ {} }}", PRODUCT_PROJECTION.join(", ")));
        query
    }
}

/// GROQ string literal; JSON string escaping is valid GROQ.
fn quote(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query() {
        assert_eq!(
            ProductQuery::default().to_groq(),
            r#"*[_type == "product"] { "id": _id, name, "slug": slug.current, price, description, "category": category->name, stock, "image": image.asset->url, featured }"#
        );
    }

    #[test]
    fn test_featured_only() {
        let groq = ProductQuery::new("product").featured_only().to_groq();
        assert!(groq.starts_with(r#"*[_type == "product" && featured == true] {"#));
    }

    #[test]
    fn test_order_by() {
        let groq = ProductQuery::new("product").order_by("name").to_groq();
        assert!(groq.starts_with(r#"*[_type == "product"] | order(name asc) {"#));

        let groq = ProductQuery::new("product")
            .order_by_with("price", SortOrder::Desc)
            .to_groq();
        assert!(groq.contains("| order(price desc)"));
    }

    #[test]
    fn test_document_type_is_quoted() {
        let groq = ProductQuery::new(r#"x" || true"#).to_groq();
        assert!(groq.starts_with(r#"*[_type == "x\" || true"]"#));
    }
}
