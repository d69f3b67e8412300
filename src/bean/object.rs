//! Equality, hashing and dumps driven by bean property tables

use std::collections::hash_map::DefaultHasher;
use std::fmt::Write;
use std::hash::{Hash, Hasher};

use super::{Bean, Property, PropertyValue};

/// Declared properties of `bean`, minus its ignored ones
pub fn visible_properties(bean: &dyn Bean) -> Vec<Property<'_>> {
    let ignored = bean.ignored_properties();
    bean.properties()
        .into_iter()
        .filter(|p| !ignored.contains(&p.name))
        .collect()
}

/// Structural equality of two beans
///
/// Beans are equal when they have the same type name and every visible
/// property compares equal, recursing into nested beans, lists and modules.
///
/// # Examples
///
/// ```
/// use synd_rs::bean;
/// use synd_rs::synd::SyndLink;
///
/// let a = SyndLink::new("http://example.com/a");
/// let mut b = SyndLink::new("http://example.com/a");
/// assert!(bean::equals(&a, &b));
///
/// b.rel = "self".to_string();
/// assert!(!bean::equals(&a, &b));
/// ```
pub fn equals(a: &dyn Bean, b: &dyn Bean) -> bool {
    if a.bean_name() != b.bean_name() {
        return false;
    }

    let left = visible_properties(a);
    let right = visible_properties(b);

    left.len() == right.len()
        && left
            .iter()
            .zip(right.iter())
            .all(|(l, r)| l.name == r.name && l.value == r.value)
}

/// Feed the visible properties of `bean` into `state`
pub fn hash<H: Hasher>(bean: &dyn Bean, state: &mut H) {
    bean.bean_name().hash(state);
    for property in visible_properties(bean) {
        property.name.hash(state);
        property.value.hash(state);
    }
}

/// Hash of `bean` with the standard library's default hasher
pub fn hash_code(bean: &dyn Bean) -> u64 {
    let mut hasher = DefaultHasher::new();
    hash(bean, &mut hasher);
    hasher.finish()
}

/// Human-readable listing of every visible property, one per line
///
/// Each line has the form `Type.path.to.property=value`; list elements are
/// suffixed with their index.
///
/// # Examples
///
/// ```
/// use synd_rs::bean;
/// use synd_rs::synd::SyndCategory;
///
/// let category = SyndCategory::new("rust");
/// let dump = bean::dump(&category);
/// assert!(dump.contains("SyndCategory.name=rust"));
/// assert!(dump.contains("SyndCategory.taxonomyUri=null"));
/// ```
pub fn dump(bean: &dyn Bean) -> String {
    let mut out = String::new();
    dump_bean(&mut out, bean.bean_name(), bean);
    out
}

fn dump_bean(out: &mut String, prefix: &str, bean: &dyn Bean) {
    for property in visible_properties(bean) {
        let path = format!("{}.{}", prefix, property.name);
        dump_value(out, &path, &property.value);
    }
}

fn dump_value(out: &mut String, path: &str, value: &PropertyValue<'_>) {
    match value {
        PropertyValue::Null => {
            let _ = writeln!(out, "{}=null", path);
        }
        PropertyValue::Bool(b) => {
            let _ = writeln!(out, "{}={}", path, b);
        }
        PropertyValue::Integer(i) => {
            let _ = writeln!(out, "{}={}", path, i);
        }
        PropertyValue::Float(f) => {
            let _ = writeln!(out, "{}={}", path, f);
        }
        PropertyValue::Text(t) => {
            let _ = writeln!(out, "{}={}", path, t);
        }
        PropertyValue::Date(d) => {
            let _ = writeln!(out, "{}={}", path, d.to_rfc3339());
        }
        PropertyValue::Bean(bean) => dump_bean(out, path, *bean),
        PropertyValue::Module(module) => dump_bean(out, path, *module),
        PropertyValue::List(items) if items.is_empty() => {
            let _ = writeln!(out, "{}=[]", path);
        }
        PropertyValue::List(items) => {
            for (i, item) in items.iter().enumerate() {
                dump_value(out, &format!("{}[{}]", path, i), item);
            }
        }
    }
}
