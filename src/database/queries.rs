use rusqlite::{Connection, OptionalExtension};
use thiserror::Error;

use crate::models::Entry;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no entry with id {0}")]
    NotFound(String),
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
}

pub fn list_entries(conn: &Connection) -> Result<Vec<Entry>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT id, title, description, created_at, scheduled_date
         FROM entries
         ORDER BY rowid",
    )?;

    let entries = stmt
        .query_map([], |row| {
            Ok(Entry {
                id: row.get(0)?,
                title: row.get(1)?,
                description: row.get(2)?,
                created_at: row.get(3)?,
                scheduled_date: row.get(4)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(entries)
}

pub fn get_entry(conn: &Connection, id: &str) -> Result<Entry, StoreError> {
    conn.query_row(
        "SELECT id, title, description, created_at, scheduled_date
         FROM entries
         WHERE id = ?1",
        [id],
        |row| {
            Ok(Entry {
                id: row.get(0)?,
                title: row.get(1)?,
                description: row.get(2)?,
                created_at: row.get(3)?,
                scheduled_date: row.get(4)?,
            })
        },
    )
    .optional()?
    .ok_or_else(|| StoreError::NotFound(id.to_string()))
}

pub fn insert_entry(conn: &Connection, entry: &Entry) -> Result<(), StoreError> {
    conn.execute(
        "INSERT INTO entries (id, title, description, created_at, scheduled_date)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        rusqlite::params![
            &entry.id,
            &entry.title,
            &entry.description,
            entry.created_at,
            entry.scheduled_date,
        ],
    )?;

    Ok(())
}

/// Full replacement of the mutable fields. The caller has already applied
/// write-time defaulting, so a missing scheduled date arrives here as NULL.
pub fn update_entry(conn: &Connection, entry: &Entry) -> Result<(), StoreError> {
    let affected = conn.execute(
        "UPDATE entries
         SET title = ?1, description = ?2, created_at = ?3, scheduled_date = ?4
         WHERE id = ?5",
        rusqlite::params![
            &entry.title,
            &entry.description,
            entry.created_at,
            entry.scheduled_date,
            &entry.id,
        ],
    )?;

    if affected == 0 {
        return Err(StoreError::NotFound(entry.id.clone()));
    }

    Ok(())
}

pub fn delete_entry(conn: &Connection, id: &str) -> Result<(), StoreError> {
    let affected = conn.execute("DELETE FROM entries WHERE id = ?1", [id])?;

    if affected == 0 {
        return Err(StoreError::NotFound(id.to_string()));
    }

    Ok(())
}
