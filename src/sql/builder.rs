//! Builds parameterized INSERT, SELECT, UPDATE, DELETE for a table descriptor.

/// Static description of a table: identifiers only, values are always bound.
#[derive(Clone, Copy, Debug)]
pub struct Table {
    pub name: &'static str,
    pub pk: &'static str,
    /// Columns written by INSERT and UPDATE, in bind order.
    pub writable: &'static [&'static str],
    /// Columns filled by store defaults.
    pub managed: &'static [&'static str],
}

pub const ACCOUNTS: Table = Table {
    name: "accounts",
    pk: "id",
    writable: &["platform", "url", "identity", "passphrase", "notes"],
    managed: &["createdAt", "updatedAt"],
};

/// Quote identifier for SQLite (safe: only from descriptors).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

fn select_column_list(table: &Table) -> String {
    std::iter::once(table.pk)
        .chain(table.writable.iter().copied())
        .chain(table.managed.iter().copied())
        .map(quoted)
        .collect::<Vec<_>>()
        .join(", ")
}

/// INSERT of all writable columns, returning the stored row.
pub fn insert(table: &Table) -> String {
    let cols = table.writable.iter().map(|c| quoted(c)).collect::<Vec<_>>().join(", ");
    let params = vec!["?"; table.writable.len()].join(", ");
    format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        quoted(table.name),
        cols,
        params,
        select_column_list(table)
    )
}

/// SELECT of every row in primary-key order.
pub fn select_list(table: &Table) -> String {
    format!(
        "SELECT {} FROM {} ORDER BY {}",
        select_column_list(table),
        quoted(table.name),
        quoted(table.pk)
    )
}

/// SELECT by primary key. Caller binds id as sole param.
pub fn select_by_id(table: &Table) -> String {
    format!(
        "SELECT {} FROM {} WHERE {} = ?",
        select_column_list(table),
        quoted(table.name),
        quoted(table.pk)
    )
}

/// Full replace of writable columns by primary key, returning the row.
/// Managed columns are left to whatever the store already holds.
pub fn update(table: &Table) -> String {
    let sets = table
        .writable
        .iter()
        .map(|c| format!("{} = ?", quoted(c)))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "UPDATE {} SET {} WHERE {} = ? RETURNING {}",
        quoted(table.name),
        sets,
        quoted(table.pk),
        select_column_list(table)
    )
}

/// DELETE by primary key. Caller binds id as sole param.
pub fn delete(table: &Table) -> String {
    format!("DELETE FROM {} WHERE {} = ?", quoted(table.name), quoted(table.pk))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_binds_writable_columns_only() {
        let sql = insert(&ACCOUNTS);
        assert!(sql.starts_with(
            r#"INSERT INTO "accounts" ("platform", "url", "identity", "passphrase", "notes") VALUES (?, ?, ?, ?, ?)"#
        ));
        assert!(sql.ends_with(r#"RETURNING "id", "platform", "url", "identity", "passphrase", "notes", "createdAt", "updatedAt""#));
    }

    #[test]
    fn update_does_not_touch_timestamps() {
        let sql = update(&ACCOUNTS);
        assert!(!sql.contains(r#""updatedAt" ="#));
        assert!(sql.contains(r#"WHERE "id" = ? RETURNING"#));
        assert_eq!(sql.matches('?').count(), ACCOUNTS.writable.len() + 1);
    }

    #[test]
    fn list_is_ordered_by_pk() {
        assert!(select_list(&ACCOUNTS).ends_with(r#"FROM "accounts" ORDER BY "id""#));
        assert_eq!(delete(&ACCOUNTS), r#"DELETE FROM "accounts" WHERE "id" = ?"#);
    }
}
