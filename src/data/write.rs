use crate::common::payload::Reading;
use crate::data::{read, COUNTER_ID};

use anyhow::{bail, Result};
use chrono::NaiveDate;
use rusqlite::{params, Connection, TransactionBehavior};
use tracing::debug;

pub fn insert_measurement(conn: &Connection, reading: &Reading, date: NaiveDate) -> Result<i64> {
    let query = "INSERT INTO measurements (humidity, temperature, perceived_temperature, date)
                 VALUES (?, ?, ?, ?)";

    conn.execute(
        query,
        params![
            reading.humidity,
            reading.temperature,
            reading.perceived_temperature,
            date
        ],
    )?;

    Ok(conn.last_insert_rowid())
}

pub fn delete_measurement(conn: &Connection, id: i64) -> Result<i64> {
    let rows = conn.execute("DELETE FROM measurements WHERE id = ?", [id])?;

    if rows == 0 {
        bail!("no measurement with id {}", id);
    }

    Ok(id)
}

/// Upserts the counter row: threshold becomes `n` and the running count is
/// reset to 0 regardless of prior state.
pub fn set_threshold(conn: &Connection, n: i64) -> Result<()> {
    let query = "INSERT INTO submission_counter (id, threshold, current)
                 VALUES (?, ?, 0)
                 ON CONFLICT(id) DO UPDATE SET threshold = excluded.threshold, current = 0";

    conn.execute(query, params![COUNTER_ID, n])?;

    Ok(())
}

/// Legacy threshold update tied to the fixed counter id: changes the threshold
/// but leaves the running count untouched. Returns false when the counter row
/// doesn't exist yet.
pub fn update_threshold_only(conn: &Connection, n: i64) -> Result<bool> {
    let rows = conn.execute(
        "UPDATE submission_counter SET threshold = ? WHERE id = ?",
        params![n, COUNTER_ID],
    )?;

    Ok(rows > 0)
}

/// Runs one submission through the counter. Returns true when the reading was
/// committed as a Measurement, false when it was merely counted.
///
/// The whole read-modify-write runs in one IMMEDIATE transaction so two racing
/// submissions can't both observe the same count.
pub fn record_submission(conn: &mut Connection, reading: &Reading, date: NaiveDate) -> Result<bool> {
    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

    let counter = match read::get_counter(&tx)? {
        Some(counter) => counter,
        None => {
            //First submission ever: default threshold of 1 commits every other one
            tx.execute(
                "INSERT INTO submission_counter (id, threshold, current) VALUES (?, 1, 0)",
                [COUNTER_ID],
            )?;
            crate::model::SubmissionCounter {
                id: COUNTER_ID,
                threshold: 1,
                current: 0,
            }
        }
    };

    let committed = counter.current == counter.threshold;

    if committed {
        insert_measurement(&tx, reading, date)?;
        tx.execute(
            "UPDATE submission_counter SET current = 0 WHERE id = ?",
            [counter.id],
        )?;
        debug!("Committed measurement {:?} for {}", reading, date);
    } else {
        tx.execute(
            "UPDATE submission_counter SET current = current + 1 WHERE id = ?",
            [counter.id],
        )?;
        debug!(
            "Counted submission without committing ({}/{})",
            counter.current + 1,
            counter.threshold
        );
    }

    tx.commit()?;

    Ok(committed)
}
