//! HTML rendering of the page DTOs.

use serde::Serialize;
use tera::{Context, Tera};

use crate::dto::book::BookPageData;
use crate::dto::cart::CartPageData;
use crate::dto::category::CategoryPageData;

const TEMPLATES: [(&str, &str); 5] = [
    (
        "components/pagination.html",
        include_str!("../../templates/components/pagination.html"),
    ),
    (
        "components/confirmation_dialog.html",
        include_str!("../../templates/components/confirmation_dialog.html"),
    ),
    (
        "book/index.html",
        include_str!("../../templates/book/index.html"),
    ),
    (
        "category/index.html",
        include_str!("../../templates/category/index.html"),
    ),
    (
        "cart/index.html",
        include_str!("../../templates/cart/index.html"),
    ),
];

/// Compiled page templates.
pub struct Views {
    tera: Tera,
}

impl Views {
    pub fn new() -> tera::Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES)?;
        Ok(Self { tera })
    }

    pub fn render_book_page(&self, page: &BookPageData) -> tera::Result<String> {
        self.render("book/index.html", page)
    }

    pub fn render_category_page(&self, page: &CategoryPageData) -> tera::Result<String> {
        self.render("category/index.html", page)
    }

    pub fn render_cart_page(&self, page: &CartPageData) -> tera::Result<String> {
        self.render("cart/index.html", page)
    }

    fn render<T: Serialize>(&self, template: &str, page: &T) -> tera::Result<String> {
        let mut context = Context::new();
        context.insert("page", page);
        self.tera
            .render(template, &context)
            .inspect_err(|err| log::error!("Failed to render {template}: {err}"))
    }
}
