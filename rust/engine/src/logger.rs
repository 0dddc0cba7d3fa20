//! Round history records and JSONL logging.
//!
//! Every completed round can be serialized as one JSON line, carrying
//! enough information (seed, blinds, action log, board, payouts) to
//! replay or audit the round later.

use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::player::{Chips, PlayerAction};
use crate::round::{Phase, Round, RoundOutcome};

/// One logged action: who acted, in which phase, and what they did.
/// Substituted folds (illegal provider moves) are recorded as folds.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub seat: usize,
    pub player_id: usize,
    pub phase: Phase,
    pub action: PlayerAction,
}

/// Complete record of one round, serialized to JSONL for round history
/// files.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Round identifier, `YYYYMMDD-NNNNNN`.
    pub round_id: String,
    /// Deck seed; replaying with it reproduces the round's cards.
    pub seed: u64,
    /// (small, big) forced bets in effect.
    pub blinds: (Chips, Chips),
    pub actions: Vec<ActionRecord>,
    pub board: Vec<Card>,
    /// Winning player id(s).
    pub winners: Vec<usize>,
    /// Amount received per winning player id.
    pub payouts: Vec<(usize, Chips)>,
    pub pot: Chips,
    pub went_to_showdown: bool,
    /// RFC3339 timestamp, injected at write time if absent.
    #[serde(default)]
    pub ts: Option<String>,
}

impl RoundRecord {
    /// Snapshot of a finished round and its outcome.
    pub fn from_round(round_id: String, round: &Round, outcome: &RoundOutcome) -> Self {
        Self {
            round_id,
            seed: round.seed(),
            blinds: round.blinds(),
            actions: round.actions().to_vec(),
            board: round.board().to_vec(),
            winners: outcome.winners.clone(),
            payouts: outcome.payouts.clone(),
            pot: outcome.pot,
            went_to_showdown: outcome.went_to_showdown,
            ts: None,
        }
    }
}

pub fn format_round_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

/// Appends round records to a JSONL file, one line per round.
pub struct RoundLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl RoundLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                let _ = create_dir_all(parent);
            }
        }
        let file = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(file)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    /// Id generation without a backing file, for tests.
    pub fn in_memory(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_round_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &RoundRecord) -> std::io::Result<()> {
        let mut record = record.clone();
        if record.ts.is_none() {
            record.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&record).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
