use darling::FromField;
use syn::{Field, Ident, LitStr, Meta};

const MISSING_TAG: &str = "expected at least one tag, e.g. `mapstructure = \"..\"`";

pub struct BindFieldReceiver {
    pub ident: Ident,
    pub tags: Vec<(String, LitStr)>,
    pub opaque: bool,
}

impl BindFieldReceiver {
    /// Fields without a `#[bind]` attribute are left out of the generated
    /// field table.
    pub fn is_tagged(&self) -> bool {
        !self.tags.is_empty()
    }
}

impl FromField for BindFieldReceiver {
    fn from_field(field: &Field) -> darling::Result<Self> {
        let ident = field.ident.clone().ok_or_else(|| {
            darling::Error::custom("Bindable derive only supports structs with named fields")
                .with_span(field)
        })?;

        let mut tags: Vec<(String, LitStr)> = Vec::new();
        let mut opaque = false;
        let mut accumulator = darling::Error::accumulator();

        for attr in &field.attrs {
            if !attr.path().is_ident("bind") {
                continue;
            }

            if matches!(attr.meta, Meta::Path(_)) {
                let err = darling::Error::custom(MISSING_TAG).with_span(attr.path());
                accumulator.push(err);
                continue;
            }

            let parsed = attr.parse_nested_meta(|meta| {
                let Some(name) = meta.path.get_ident() else {
                    return Err(meta.error("expected a tag name"));
                };

                if name == "opaque" {
                    if !meta.input.is_empty() && !meta.input.peek(syn::Token![,]) {
                        let msg = "expected `opaque` without a value";
                        return Err(syn::Error::new(name.span(), msg));
                    }
                    opaque = true;
                    return Ok(());
                }

                let value: LitStr = meta.value()?.parse()?;
                if tags.iter().any(|(existing, _)| name == existing) {
                    let msg = format!("duplicate tag `{name}`");
                    return Err(syn::Error::new(name.span(), msg));
                }
                tags.push((name.to_string(), value));

                Ok(())
            });

            if let Err(err) = parsed {
                accumulator.push(err.into());
            }
        }

        if opaque && tags.is_empty() {
            accumulator.push(
                darling::Error::custom("`opaque` fields still need a tag to derive a key from")
                    .with_span(&ident),
            );
        }

        accumulator.finish_with(BindFieldReceiver {
            ident,
            tags,
            opaque,
        })
    }
}
