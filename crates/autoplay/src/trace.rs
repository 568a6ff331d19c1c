use crate::{AutoAction, AutoplayError};
use cosmic_golf_core::{HoleResult, RunOutcome};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StepRecord {
    pub step: u32,
    pub hole: u8,
    pub action: AutoAction,
    /// Cash when the choice was made.
    pub money: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AutoplayReport {
    pub seed: u64,
    pub outcome: RunOutcome,
    pub holes_cleared: usize,
    pub money: i64,
    pub caddies: Vec<String>,
    pub holes: Vec<HoleResult>,
    pub trace: Vec<StepRecord>,
}

impl AutoplayReport {
    pub fn to_text_report(&self) -> String {
        let mut lines = vec![
            format!("status: {}", outcome_label(&self.outcome)),
            format!(
                "final: holes cleared={} money={} seed={}",
                self.holes_cleared, self.money, self.seed
            ),
            format!(
                "caddies: {}",
                if self.caddies.is_empty() {
                    "(none)".to_string()
                } else {
                    self.caddies.join(", ")
                }
            ),
            String::new(),
            "holes:".to_string(),
        ];
        for hole in &self.holes {
            let earned = hole
                .earnings
                .map(|value| format!("earned {value}"))
                .unwrap_or_else(|| "failed".to_string());
            lines.push(format!(
                "  hole {:>2}: score {:>3} target {:>3} {earned}",
                hole.hole, hole.score, hole.target
            ));
        }
        lines.push(String::new());
        lines.push("steps:".to_string());
        for step in &self.trace {
            lines.push(format!(
                "  step {:>4} | hole {} | money {:>4} | {}",
                step.step,
                step.hole,
                step.money,
                step.action.short_label()
            ));
        }
        lines.join("\n")
    }

    pub fn write_trace(&self, path: &Path) -> Result<(), AutoplayError> {
        write_json(path, self)
    }
}

fn outcome_label(outcome: &RunOutcome) -> String {
    match outcome {
        RunOutcome::Completed { earnings } => format!("completed, earned {earnings}"),
        RunOutcome::Failed {
            hole,
            score,
            target,
        } => format!("failed hole {hole} with {score} against {target}"),
    }
}

pub fn write_json(path: &Path, report: &AutoplayReport) -> Result<(), AutoplayError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let body = serde_json::to_string_pretty(report)?;
    fs::write(path, body)?;
    Ok(())
}
