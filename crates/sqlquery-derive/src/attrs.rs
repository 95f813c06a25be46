//! Field-level `#[sqlquery(...)]` attribute parsing.

use syn::{LitStr, Result};

/// Parsed field attributes.
#[derive(Default)]
pub(crate) struct FieldAttr {
    pub column: Option<String>,
    pub tags: Vec<String>,
    pub skip: bool,
}

impl FieldAttr {
    /// Merge every `#[sqlquery(...)]` attribute on `field`.
    pub(crate) fn from_field(field: &syn::Field) -> Result<Self> {
        let mut out = FieldAttr::default();

        for attr in &field.attrs {
            if !attr.path().is_ident("sqlquery") {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    out.skip = true;
                    return Ok(());
                }
                if meta.path.is_ident("column") {
                    let lit: LitStr = meta.value()?.parse()?;
                    out.column = Some(lit.value());
                    return Ok(());
                }
                if meta.path.is_ident("tags") {
                    let lit: LitStr = meta.value()?.parse()?;
                    out.tags.extend(
                        lit.value()
                            .split(',')
                            .map(str::trim)
                            .filter(|t| !t.is_empty())
                            .map(str::to_string),
                    );
                    return Ok(());
                }
                Err(meta.error("unknown sqlquery attribute, expected `column`, `tags` or `skip`"))
            })?;
        }

        Ok(out)
    }
}
