//! File export for allocation plans.
//!
//! CSV is the primary export: a header row matching the terminal table
//! columns, one record per assignment in allocation order. The same plan
//! can also be written as JSON.

use crate::models::{AllocationPlan, SubnetAssignment};
use itertools::Itertools;
use std::error::Error;

/// Default CSV export filename.
pub const DEFAULT_EXPORT_FILE: &str = "vlsm_allocations.csv";

const CSV_HEADER: &str =
    "Subnet,Network,Netmask,Wildcard,Prefix,First Host,Last Host,Broadcast,Usable Hosts";

/// Escape a CSV field if it contains a comma or double quote.
fn escape_csv_field(input: &str) -> String {
    if input.contains(',') || input.contains('"') {
        // Enclose in double quotes and double any quotes within the field.
        let escaped = input.replace('"', "\"\"");
        format!("\"{}\"", escaped)
    } else {
        input.to_string()
    }
}

fn csv_row(a: &SubnetAssignment) -> String {
    [
        a.label(),
        a.subnet.lo().to_string(),
        a.netmask.to_string(),
        a.wildcard.to_string(),
        a.prefix_str(),
        a.first_host.to_string(),
        a.last_host.to_string(),
        a.broadcast.to_string(),
        a.usable_hosts.to_string(),
    ]
    .iter()
    .map(|field| escape_csv_field(field))
    .join(",")
}

/// Render the plan's assignments as CSV, header included.
pub fn render_csv(plan: &AllocationPlan) -> String {
    let mut out = String::with_capacity(64 * (plan.assignments.len() + 1));
    out.push_str(CSV_HEADER);
    out.push('\n');
    for a in &plan.assignments {
        out.push_str(&csv_row(a));
        out.push('\n');
    }
    out
}

/// Write the plan's assignments to a CSV file.
pub fn export_csv(plan: &AllocationPlan, path: &str) -> Result<(), Box<dyn Error>> {
    log::info!(
        "#Start export_csv() {} assignments to {}",
        plan.assignments.len(),
        path
    );
    std::fs::write(path, render_csv(plan))
        .map_err(|e| format!("Error writing CSV file {}: {}", path, e))?;
    Ok(())
}

/// Write the whole plan (halt, warnings and unmet list included) to a
/// JSON file.
pub fn export_json(plan: &AllocationPlan, path: &str) -> Result<(), Box<dyn Error>> {
    log::info!("#Start export_json() to {}", path);
    let json =
        serde_json::to_string_pretty(plan).map_err(|e| format!("Error serializing plan: {}", e))?;
    std::fs::write(path, json)
        .map_err(|e| format!("Error writing JSON file {}: {}", path, e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Ipv4;
    use crate::processing::plan;

    #[test]
    fn test_escape_csv_field() {
        assert_eq!(escape_csv_field("plain"), "plain");
        assert_eq!(escape_csv_field("a,b"), "\"a,b\"");
        assert_eq!(escape_csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_render_csv() {
        let base = Ipv4::new("192.168.0.0/24").unwrap();
        let result = plan(base, &[60, 28, 10, 2]).expect("plan should run");
        let csv = render_csv(&result);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(
            lines[1],
            "Sub-1,192.168.0.0,255.255.255.192,0.0.0.63,/26,192.168.0.1,192.168.0.62,192.168.0.63,62"
        );
        assert_eq!(
            lines[4],
            "Sub-4,192.168.0.112,255.255.255.252,0.0.0.3,/30,192.168.0.113,192.168.0.114,192.168.0.115,2"
        );
    }

    #[test]
    fn test_render_csv_empty_plan() {
        let base = Ipv4::new("192.168.0.0/28").unwrap();
        let result = plan(base, &[20]).expect("plan should run");
        let csv = render_csv(&result);
        assert_eq!(csv, format!("{}\n", CSV_HEADER));
    }
}
