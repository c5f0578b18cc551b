use std::convert::Infallible;

use crate::binder::Binder;
use crate::error::BindError;
use crate::options::{BindOption, Options};
use crate::shape::{Bindable, Shape};

/// Walks `target` and registers the key of every tagged field with `binder`.
///
/// Keys are built from the tag values of the field and all of its enclosing
/// fields, joined with the separator, so with the defaults a field tagged
/// `brokers` inside a field tagged `kafka` is registered as `kafka_brokers`.
/// Fields without the tag are ignored. Nested records and optional references
/// are walked before the key of the field holding them is registered, an
/// absent `Option` is walked as its `Default` value.
///
/// Fails with [`BindError::NilBinder`] if `binder` is `None`, and with
/// [`BindError::InvalidType`] if `target` does not resolve to a record.
pub fn bind<'b, B>(
    binder: impl Into<Option<&'b mut B>>,
    target: &dyn Bindable,
    options: impl IntoIterator<Item = BindOption>,
) -> Result<(), BindError<B::Error>>
where
    B: Binder + ?Sized + 'b,
{
    let options: Options = options.into_iter().collect();
    bind_with_options(binder, target, &options)
}

/// Like [`bind`], with options that have already been resolved.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(tag_name = %options.tag_name, separator = %options.separator)
)]
pub fn bind_with_options<'b, B>(
    binder: impl Into<Option<&'b mut B>>,
    target: &dyn Bindable,
    options: &Options,
) -> Result<(), BindError<B::Error>>
where
    B: Binder + ?Sized + 'b,
{
    walk(binder.into(), target, options, &[])
}

/// Returns every key [`bind`] would register for `target`, in registration
/// order.
pub fn keys(
    target: &dyn Bindable,
    options: impl IntoIterator<Item = BindOption>,
) -> Result<Vec<String>, BindError> {
    let mut keys = Vec::new();
    let mut record = |key: &str| {
        keys.push(key.to_owned());
        Ok::<_, Infallible>(())
    };

    bind(&mut record, target, options)?;

    Ok(keys)
}

fn walk<B>(
    binder: Option<&mut B>,
    target: &dyn Bindable,
    options: &Options,
    path: &[&'static str],
) -> Result<(), BindError<B::Error>>
where
    B: Binder + ?Sized,
{
    let Some(binder) = binder else {
        return Err(BindError::NilBinder);
    };

    walk_shape(Some(binder), target.shape(), options, path)
}

fn walk_shape<B>(
    binder: Option<&mut B>,
    shape: Shape<'_>,
    options: &Options,
    path: &[&'static str],
) -> Result<(), BindError<B::Error>>
where
    B: Binder + ?Sized,
{
    let Some(binder) = binder else {
        return Err(BindError::NilBinder);
    };

    let fields = match shape {
        Shape::Pointer(pointee) => {
            return walk(Some(binder), pointee.get(), options, path);
        }
        Shape::Record(fields) => fields,
        Shape::Scalar => return Err(BindError::InvalidType),
    };

    if let Some(max_depth) = options.max_depth {
        if path.len() > max_depth {
            return Err(BindError::TooDeep {
                key: path.join(options.separator.as_str()),
                max_depth,
            });
        }
    }

    for field in &fields {
        let Some(tag) = field.tag(&options.tag_name) else {
            tracing::trace!(field = field.name(), "no tag, skipping");
            continue;
        };

        let mut field_path = path.to_vec();
        field_path.push(tag);

        let shape = field.value().shape();
        if matches!(shape, Shape::Record(_) | Shape::Pointer(_)) {
            walk_shape(Some(&mut *binder), shape, options, &field_path)?;
        }

        let key = field_path.join(options.separator.as_str());
        tracing::trace!(field = field.name(), %key, "binding");
        binder.bind_env(&key).map_err(BindError::Binder)?;
    }

    Ok(())
}
