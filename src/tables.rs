use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    core::{EnergySample, ProjectionPoint, training::TrainingLog},
    node::NodeStatus,
    quantity::{power::Watts, ratios::Percentage},
};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

pub fn build_samples_table(samples: &[EnergySample]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Time", "Solar", "Load", "Net", "Battery", "Mode"]);
    for sample in samples {
        table.add_row(vec![
            Cell::new(sample.hour),
            Cell::new(sample.solar)
                .set_alignment(CellAlignment::Right)
                .fg(if sample.solar > Watts::ZERO { Color::DarkYellow } else { Color::Reset }),
            Cell::new(sample.load)
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Dim),
            Cell::new(format!("{:+.0} W", sample.net.0))
                .set_alignment(CellAlignment::Right)
                .fg(if sample.net > Watts::ZERO { Color::Green } else { Color::Red }),
            Cell::new(sample.battery).set_alignment(CellAlignment::Right).fg(
                if sample.battery >= Percentage(90.0) {
                    Color::Green
                } else if sample.battery >= Percentage(50.0) {
                    Color::DarkYellow
                } else {
                    Color::Red
                },
            ),
            Cell::new(sample.mode).fg(sample.mode.color()).add_attribute(Attribute::Bold),
        ]);
    }
    table
}

pub fn build_projection_table(points: &[ProjectionPoint]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Time", "Solar", "Load", "Excess"]);
    for point in points {
        let excess = point.solar - point.load;
        table.add_row(vec![
            Cell::new(point.hour),
            Cell::new(point.solar).set_alignment(CellAlignment::Right),
            Cell::new(point.load).set_alignment(CellAlignment::Right).add_attribute(Attribute::Dim),
            Cell::new(excess.max(Watts::ZERO)).set_alignment(CellAlignment::Right).fg(
                if excess > Watts::ZERO { Color::Green } else { Color::Reset },
            ),
        ]);
    }
    table
}

pub fn build_status_table(status: &NodeStatus) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Mining", "Epoch", "Loss", "Hashrate", "Balance", "Pending"]);
    table.add_row(vec![
        Cell::new(if status.is_mining { "yes" } else { "no" })
            .fg(if status.is_mining { Color::Green } else { Color::Red }),
        Cell::new(status.epoch).set_alignment(CellAlignment::Right),
        Cell::new(format!("{:.6}", status.loss)).set_alignment(CellAlignment::Right),
        Cell::new(status.hashrate).set_alignment(CellAlignment::Right),
        Cell::new(format!("{:.2}", status.balance)).set_alignment(CellAlignment::Right),
        Cell::new(format!("+{:.4}", status.pending_reward)).set_alignment(CellAlignment::Right),
    ]);
    table
}

pub fn build_training_table(log: &TrainingLog) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Time", "Progress"]);
    for line in log.lines() {
        table.add_row(vec![
            Cell::new(line.time.format("%H:%M:%S")).add_attribute(Attribute::Dim),
            Cell::new(&line.message).fg(Color::Green),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::core::Simulator;

    #[test]
    fn samples_table_has_a_row_per_hour() {
        let table = build_samples_table(&Simulator::default().day());
        assert_eq!(table.row_count(), 24);
        let rendered = table.to_string();
        assert!(rendered.contains("MINING"));
        assert!(rendered.contains("DRAINING"));
    }

    #[test]
    fn projection_table_has_a_row_per_hour() {
        let points: Vec<_> =
            Simulator::default().projection_with(StdRng::seed_from_u64(1)).collect();
        assert_eq!(build_projection_table(&points).row_count(), 24);
    }
}
