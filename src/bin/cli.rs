use estimate_schedule::{
    CATEGORY_RULES, CriticalPathStrategy, Estimate, ExportFormat, PARALLEL_GROUPS,
    RecommendationKind, ScheduleGenerator, ScheduleOptions, ScheduleResult, WorkItem,
    critical_path_duration, export_schedule_data, load_request_from_json, logging,
    parse_project_start_date, save_schedule_export,
};
use std::io::{self, Write};
use std::str::FromStr;

fn width(s: &str) -> usize {
    s.chars().count()
}

fn render_text_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| width(h)).collect();
    for row in rows {
        for (ci, cell) in row.iter().enumerate() {
            if ci < widths.len() && width(cell) > widths[ci] {
                widths[ci] = width(cell);
            }
        }
    }

    let mut sep = String::new();
    sep.push('+');
    for w in &widths {
        sep.push_str(&"-".repeat(*w + 2));
        sep.push('+');
    }

    let render_row = |cells: Vec<&str>| {
        let mut line = String::new();
        line.push('|');
        for (ci, cell) in cells.iter().enumerate() {
            line.push(' ');
            line.push_str(cell);
            let pad = widths[ci].saturating_sub(width(cell));
            if pad > 0 {
                line.push_str(&" ".repeat(pad));
            }
            line.push(' ');
            line.push('|');
        }
        line.push('\n');
        line
    };

    let mut out = String::new();
    out.push_str(&sep);
    out.push('\n');
    out.push_str(&render_row(headers.to_vec()));
    out.push_str(&sep);
    out.push('\n');
    for row in rows {
        out.push_str(&render_row(row.iter().map(String::as_str).collect()));
    }
    out.push_str(&sep);
    out.push('\n');
    out
}

fn render_items(items: &[WorkItem]) -> String {
    let rows: Vec<Vec<String>> = items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            vec![
                idx.to_string(),
                item.name.clone(),
                item.description.clone().unwrap_or_default(),
                format!("{:.0}", item.amount),
            ]
        })
        .collect();
    render_text_table(&["#", "name", "description", "amount"], &rows)
}

fn render_schedule(result: &ScheduleResult) -> String {
    let rows: Vec<Vec<String>> = result
        .tasks
        .iter()
        .map(|task| {
            vec![
                task.id.clone(),
                task.name.clone(),
                task.category.clone(),
                task.duration_days.to_string(),
                task.start_date.map(|d| d.to_string()).unwrap_or_default(),
                task.end_date.map(|d| d.to_string()).unwrap_or_default(),
                if task.is_parallel { "yes" } else { "" }.to_string(),
                if task.has_conflict { "yes" } else { "" }.to_string(),
                task.dependencies.join(","),
            ]
        })
        .collect();
    render_text_table(
        &[
            "id",
            "name",
            "category",
            "days",
            "start",
            "end",
            "parallel",
            "conflict",
            "depends_on",
        ],
        &rows,
    )
}

fn print_help() {
    println!(
        "Commands:\n  help                               Show this help\n  item <amount> <name...>            Add a work item\n  desc <index> <text...>             Set the description of a work item\n  remove <index>                     Remove a work item\n  items                              List work items\n  clear                              Remove all work items\n  total <amount|auto>                Override the estimate total (auto = sum of items)\n  start <YYYY-MM-DD|today>           Set the project start date\n  strategy <exhaustive|dag> [max]    Choose the critical path search\n  load <json_path>                   Load an estimate request (items, total_amount, options)\n  options <json_path>                Load schedule options from JSON\n  generate                           Generate the schedule and show it\n  show                               Show the last generated schedule\n  critical                           Show the critical path\n  summary                            Show summary and recommendations\n  export <json|csv> [path]           Print or save the last schedule\n  categories                         List work categories and parallel groups\n  quit|exit                          Exit"
    );
}

fn print_categories() {
    let rows: Vec<Vec<String>> = CATEGORY_RULES
        .iter()
        .map(|rule| {
            vec![
                rule.order.to_string(),
                rule.key.to_string(),
                rule.display_name.to_string(),
                rule.base_duration_days.to_string(),
                rule.keywords.join(","),
            ]
        })
        .collect();
    println!(
        "{}",
        render_text_table(&["order", "key", "name", "base_days", "keywords"], &rows)
    );
    println!("Parallel groups:");
    for group in PARALLEL_GROUPS {
        println!("  {}", group.join(" + "));
    }
}

fn print_summary(result: &ScheduleResult) {
    let metadata = &result.metadata;
    println!("Project start      : {}", metadata.project_start_date);
    println!("Estimated end      : {}", metadata.estimated_end_date);
    println!("Scale / season     : {} / {}", metadata.project_scale, metadata.season);
    println!("Total amount       : {:.0}", metadata.total_amount);
    println!("Total task days    : {}", metadata.total_duration_days);
    println!("Summary            : {}", result.summary.to_cli_summary());
    for rec in &result.summary.recommendations {
        let kind = match rec.kind {
            RecommendationKind::Warning => "warning",
            RecommendationKind::Suggestion => "suggestion",
            RecommendationKind::Info => "info",
        };
        if rec.affected_task_ids.is_empty() {
            println!("  [{kind}] {}", rec.message);
        } else {
            println!("  [{kind}] {} ({})", rec.message, rec.affected_task_ids.join(", "));
        }
    }
}

fn print_critical(result: &ScheduleResult) {
    let path = &result.metadata.critical_path;
    if path.is_empty() {
        println!("No critical path (no root-to-sink chain).");
        return;
    }
    println!(
        "Critical path: {} ({} days)",
        path.join(" -> "),
        critical_path_duration(&result.tasks, path)
    );
}

fn parse_index(arg: Option<&str>, len: usize) -> Option<usize> {
    arg.and_then(|s| s.parse::<usize>().ok()).filter(|idx| *idx < len)
}

fn rest_of_line(parts: std::str::SplitWhitespace<'_>) -> String {
    parts.collect::<Vec<_>>().join(" ")
}

fn main() {
    logging::init("warn");

    let generator = ScheduleGenerator::new();
    let mut items: Vec<WorkItem> = Vec::new();
    let mut total_amount: Option<f64> = None;
    let mut options = ScheduleOptions::default();
    let mut last: Option<ScheduleResult> = None;

    println!("Estimate Scheduler (CLI) - type 'help' for commands\n");

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        line.clear();
        match stdin.read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let mut parts = input.split_whitespace();
        let cmd = parts.next().unwrap_or("");

        match cmd {
            "help" => print_help(),
            "quit" | "exit" => break,
            "item" => {
                let amount_s = parts.next();
                let name = rest_of_line(parts);
                match amount_s.map(f64::from_str) {
                    Some(Ok(amount)) if !name.is_empty() => {
                        items.push(WorkItem::new(name.clone(), amount));
                        println!("Added item {}: {} ({:.0})", items.len() - 1, name, amount);
                    }
                    Some(Err(_)) => println!("Invalid amount"),
                    _ => println!("Usage: item <amount> <name...>"),
                }
            }
            "desc" => match parse_index(parts.next(), items.len()) {
                Some(idx) => {
                    let text = rest_of_line(parts);
                    items[idx].description = if text.is_empty() { None } else { Some(text) };
                    println!("Updated description of item {idx}.");
                }
                None => println!("Usage: desc <index> <text...>"),
            },
            "remove" => match parse_index(parts.next(), items.len()) {
                Some(idx) => {
                    let removed = items.remove(idx);
                    println!("Removed item {idx}: {}", removed.name);
                }
                None => println!("Usage: remove <index>"),
            },
            "items" => {
                if items.is_empty() {
                    println!("No work items.");
                } else {
                    println!("{}", render_items(&items));
                }
            }
            "clear" => {
                items.clear();
                total_amount = None;
                last = None;
                println!("Cleared all work items.");
            }
            "total" => match parts.next() {
                Some("auto") => {
                    total_amount = None;
                    println!("Total amount follows the item sum.");
                }
                Some(raw) => match raw.parse::<f64>() {
                    Ok(value) => {
                        total_amount = Some(value);
                        println!("Total amount set to {value:.0}.");
                    }
                    Err(_) => println!("Invalid amount"),
                },
                None => println!("Usage: total <amount|auto>"),
            },
            "start" => match parts.next() {
                Some("today") => {
                    options.project_start_date = None;
                    println!("Project start follows today's date.");
                }
                Some(raw) => match parse_project_start_date(raw) {
                    Ok(date) => {
                        options.project_start_date = Some(date);
                        println!("Project start set to {date}.");
                    }
                    Err(e) => println!("Error: {e}"),
                },
                None => println!("Usage: start <YYYY-MM-DD|today>"),
            },
            "strategy" => match parts.next() {
                Some("exhaustive") => {
                    let max_paths = parts.next().and_then(|s| s.parse::<usize>().ok());
                    options.critical_path = CriticalPathStrategy::Exhaustive { max_paths };
                    println!("Critical path strategy: exhaustive.");
                }
                Some("dag") => {
                    options.critical_path = CriticalPathStrategy::Dag;
                    println!("Critical path strategy: dag.");
                }
                _ => println!("Usage: strategy <exhaustive|dag> [max_paths]"),
            },
            "load" => match parts.next() {
                Some(path) => {
                    let loaded = load_request_from_json(path)
                        .and_then(|request| request.into_parts(&options));
                    match loaded {
                        Ok((estimate, resolved)) => {
                            items = estimate.items;
                            total_amount = estimate.total_amount;
                            options = resolved;
                            last = None;
                            println!("Loaded {} work item(s) from {path}.", items.len());
                        }
                        Err(e) => println!("Error loading estimate: {e}"),
                    }
                }
                None => println!("Usage: load <json_path>"),
            },
            "options" => match parts.next() {
                Some(path) => match ScheduleOptions::from_json_file(path) {
                    Ok(loaded) => {
                        options = loaded;
                        println!("Options loaded from {path}.");
                    }
                    Err(e) => println!("Error loading options: {e}"),
                },
                None => println!("Usage: options <json_path>"),
            },
            "generate" => {
                let estimate = Estimate {
                    items: items.clone(),
                    total_amount,
                };
                match generator.generate(&estimate, &options) {
                    Ok(result) => {
                        println!("{}", render_schedule(&result));
                        println!("Schedule generated: {}", result.summary.to_cli_summary());
                        last = Some(result);
                    }
                    Err(e) => println!("Error: {e}"),
                }
            }
            "show" => match &last {
                Some(result) => println!("{}", render_schedule(result)),
                None => println!("No schedule yet; run 'generate'."),
            },
            "critical" => match &last {
                Some(result) => print_critical(result),
                None => println!("No schedule yet; run 'generate'."),
            },
            "summary" => match &last {
                Some(result) => print_summary(result),
                None => println!("No schedule yet; run 'generate'."),
            },
            "export" => {
                let format = parts.next().map(ExportFormat::from_str);
                let path = parts.next();
                match (format, &last) {
                    (None, _) => println!("Usage: export <json|csv> [path]"),
                    (Some(Err(e)), _) => println!("Error: {e}"),
                    (Some(Ok(_)), None) => println!("No schedule yet; run 'generate'."),
                    (Some(Ok(format)), Some(result)) => match path {
                        Some(path) => match save_schedule_export(result, format, path) {
                            Ok(()) => println!("Schedule exported to {path} as {format}."),
                            Err(e) => println!("Error exporting schedule: {e}"),
                        },
                        None => match export_schedule_data(result, format) {
                            Ok(rendered) => println!("{rendered}"),
                            Err(e) => println!("Error exporting schedule: {e}"),
                        },
                    },
                }
            }
            "categories" => print_categories(),
            _ => println!("Unknown command. Type 'help'."),
        }
    }
}
