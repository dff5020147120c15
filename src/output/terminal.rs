//! Terminal output for allocation plans.
//!
//! The `render_*` functions build plain strings so they stay testable;
//! [`print_plan`] wraps them with colored status lines.

use crate::models::{AllocationHalt, AllocationPlan, PlanStatus, SubnetAssignment};
use colored::Colorize;
use itertools::Itertools;

const TABLE_HEADERS: [&str; 9] = [
    "Subnet",
    "Network",
    "Netmask",
    "Wildcard",
    "Prefix",
    "First Host",
    "Last Host",
    "Broadcast",
    "Usable Hosts",
];

fn table_cells(a: &SubnetAssignment) -> [String; 9] {
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
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    let body = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!(" {:<width$} ", cell))
        .join("|");
    format!("|{}|", body)
}

/// Render the assignments as a grid table.
pub fn render_table(assignments: &[SubnetAssignment]) -> String {
    let mut widths: Vec<usize> = TABLE_HEADERS.iter().map(|h| h.len()).collect();
    let rows: Vec<[String; 9]> = assignments.iter().map(table_cells).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.len());
        }
    }

    let rule = format!("+{}+", widths.iter().map(|w| "-".repeat(w + 2)).join("+"));
    let headers: Vec<String> = TABLE_HEADERS.iter().map(|h| h.to_string()).collect();

    let mut out = String::new();
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format_row(&headers, &widths));
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');
    for row in &rows {
        out.push_str(&format_row(row, &widths));
        out.push('\n');
    }
    out.push_str(&rule);
    out
}

/// Render the run statistics: base network, satisfied count, host totals
/// and space utilization.
pub fn render_summary(plan: &AllocationPlan) -> String {
    format!(
        "Base network: {base}\n\
         Subnets assigned: {satisfied}/{requested}\n\
         Hosts requested: {hosts_requested}\n\
         Hosts assigned: {hosts_assigned}\n\
         Space used: {consumed}/{available} ({percent:.2}%)",
        base = plan.base,
        satisfied = plan.satisfied,
        requested = plan.requested,
        hosts_requested = plan.hosts_requested(),
        hosts_assigned = plan.hosts_assigned(),
        consumed = plan.consumed_addresses,
        available = plan.available_addresses,
        percent = plan.utilization_percent(),
    )
}

/// Render the unmet-requirement list, one line per requirement.
pub fn render_unmet(plan: &AllocationPlan) -> String {
    plan.unmet
        .iter()
        .map(|u| format!("  - Subnet #{}: {} hosts", u.index + 1, u.hosts))
        .join("\n")
}

/// Print the application banner.
pub fn print_banner() {
    println!();
    println!("{}", "═".repeat(55));
    println!("{}", "VLSM SUBNET PLANNER".cyan().bold());
    println!("{}", "═".repeat(55));
    println!();
}

/// Print the full allocation report with colored status lines.
pub fn print_plan(plan: &AllocationPlan) {
    log::info!("#Start print_plan() status {:?}", plan.status);

    println!();
    println!("{}", "═".repeat(50));
    println!("VLSM ALLOCATION REPORT");
    println!("{}", "═".repeat(50));
    for line in render_summary(plan).lines() {
        println!("{}", line.cyan());
    }

    for w in &plan.warnings {
        println!(
            "{}",
            format!(
                "Subnet #{}: prefix /{} not allowed, clamped to /30",
                w.index + 1,
                w.computed_prefix
            )
            .yellow()
        );
    }

    if !plan.assignments.is_empty() {
        println!("\nSubnet table:");
        println!("{}", render_table(&plan.assignments));
    }

    if let Some(halt) = &plan.halt {
        let line = match halt {
            AllocationHalt::SpaceExhausted { .. } => halt.to_string().yellow(),
            _ => halt.to_string().red(),
        };
        println!("{}", line);
    }

    if !plan.unmet.is_empty() {
        println!("{}", "\nUnassigned subnets:".yellow());
        println!("{}", render_unmet(plan).yellow());
    }

    if plan.status == PlanStatus::Failed {
        println!(
            "{}",
            "No subnets could be allocated. Check the parameters.".red()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Ipv4;
    use crate::processing::plan;

    fn scenario_plan() -> AllocationPlan {
        let base = Ipv4::new("192.168.0.0/24").unwrap();
        plan(base, &[60, 28, 10, 2]).expect("plan should run")
    }

    #[test]
    fn test_render_summary() {
        let summary = render_summary(&scenario_plan());
        assert!(summary.contains("Base network: 192.168.0.0/24"));
        assert!(summary.contains("Subnets assigned: 4/4"));
        assert!(summary.contains("Hosts requested: 100"));
        assert!(summary.contains("Hosts assigned: 108"));
        assert!(summary.contains("Space used: 116/256 (45.31%)"));
    }

    #[test]
    fn test_render_table() {
        let table = render_table(&scenario_plan().assignments);
        let lines: Vec<&str> = table.lines().collect();

        // rule, header, rule, 4 rows, rule
        assert_eq!(lines.len(), 8);
        assert!(lines[0].starts_with("+-"));
        assert!(lines[1].contains("| Subnet"));
        assert!(lines[1].contains("Wildcard"));
        assert!(lines[3].contains("Sub-1"));
        assert!(lines[3].contains("192.168.0.0"));
        assert!(lines[3].contains("255.255.255.192"));
        assert!(lines[3].contains("0.0.0.63"));
        assert!(lines[3].contains("/26"));
        assert!(lines[6].contains("Sub-4"));
        assert!(lines[6].contains("/30"));

        // every line of the grid has the same width
        let width = lines[0].len();
        assert!(lines.iter().all(|l| l.len() == width));
    }

    #[test]
    fn test_render_unmet() {
        let base = Ipv4::new("10.0.0.0/28").unwrap();
        let partial = plan(base, &[3, 3, 3]).expect("plan should run");
        assert_eq!(render_unmet(&partial), "  - Subnet #3: 3 hosts");
    }
}
