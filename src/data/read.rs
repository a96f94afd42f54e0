use crate::data::COUNTER_ID;
use crate::model::{Measurement, SubmissionCounter};

use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};

pub fn get_counter(conn: &Connection) -> Result<Option<SubmissionCounter>> {
    let result = conn.query_row(
        "SELECT id, threshold, current
         FROM submission_counter
         WHERE id = ?",
        [COUNTER_ID],
        |row| {
            Ok(SubmissionCounter {
                id: row.get(0)?,
                threshold: row.get(1)?,
                current: row.get(2)?,
            })
        },
    );

    match result {
        Ok(counter) => Ok(Some(counter)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

pub fn get_all_measurements(conn: &Connection) -> Result<Vec<Measurement>> {
    let mut stmt = conn.prepare(
        "SELECT id, humidity, temperature, perceived_temperature, date
         FROM measurements
         ORDER BY id",
    )?;

    let rows = stmt.query_map([], map_measurement)?;

    Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
}

pub fn get_by_date(conn: &Connection, date: NaiveDate) -> Result<Vec<Measurement>> {
    let mut stmt = conn.prepare(
        "SELECT id, humidity, temperature, perceived_temperature, date
         FROM measurements
         WHERE date = ?
         ORDER BY id",
    )?;

    let rows = stmt.query_map(params![date], map_measurement)?;

    Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
}

pub fn exists_for_date(conn: &Connection, date: NaiveDate) -> Result<bool> {
    let exists = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM measurements WHERE date = ?)",
        params![date],
        |row| row.get(0),
    )?;

    Ok(exists)
}

fn map_measurement(row: &Row) -> rusqlite::Result<Measurement> {
    Ok(Measurement {
        id: row.get(0)?,
        humidity: row.get(1)?,
        temperature: row.get(2)?,
        perceived_temperature: row.get(3)?,
        date: row.get(4)?,
    })
}
