//! Source record data model for the CSV-to-JSON converter.
//!
//! One `Source` is built per non-empty CSV row: the first column is the
//! source name, every remaining column a host entry. The serialized key
//! order (`id`, `group`, `name`, `hosts`) follows field declaration order.
use serde::Serialize;

use crate::ident::derive_id;

/// One named origin of a set of blocked hosts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Source {
    pub id: String,
    pub group: i64,
    pub name: String,
    pub hosts: Vec<String>,
}

impl Source {
    /// Build a record from the fields of one CSV row. The name is trimmed,
    /// hosts are trimmed with empty entries dropped, and the column order
    /// of the surviving hosts is preserved. Duplicate hosts are kept.
    pub fn from_row<'a, I>(mut fields: I, group: i64) -> Self
    where
        I: Iterator<Item = &'a str>,
    {
        let name = fields.next().unwrap_or("").trim().to_string();
        let hosts: Vec<String> = fields
            .map(str::trim)
            .filter(|h| !h.is_empty())
            .map(str::to_string)
            .collect();
        Self {
            id: derive_id(&name),
            group,
            name,
            hosts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_name_and_derives_id() {
        let s = Source::from_row(["  Acme Corp.  ", "host1.com"].into_iter(), 1);
        assert_eq!(s.name, "Acme Corp.");
        assert_eq!(s.id, "acme-corp");
        assert_eq!(s.group, 1);
    }

    #[test]
    fn drops_empty_hosts_and_preserves_order() {
        let s = Source::from_row(
            ["Acme Corp.", " host1.com", " ", "", " host2.com "].into_iter(),
            1,
        );
        assert_eq!(s.hosts, vec!["host1.com", "host2.com"]);
    }

    #[test]
    fn duplicate_hosts_are_kept() {
        let s = Source::from_row(["A", "h.com", "h.com"].into_iter(), 2);
        assert_eq!(s.hosts, vec!["h.com", "h.com"]);
    }

    #[test]
    fn row_with_only_a_name_has_no_hosts() {
        let s = Source::from_row(["Solo"].into_iter(), 3);
        assert_eq!(s.name, "Solo");
        assert!(s.hosts.is_empty());
    }
}
