use ahash::AHashMap;
use bt_template::prelude::*;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Snapshot encodings understood by the CLI.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum Format {
    #[default]
    Bin,
    Json,
}

/// Inspect, export and verify behavior-tree node templates
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the built-in node definitions
    Catalog {
        /// Only list nodes of this kind (composite, decorator, condition, action)
        #[arg(short, long)]
        node_type: Option<NodeType>,
    },
    /// Write the built-in template to a snapshot file
    Export {
        path: PathBuf,
        #[arg(short, long, value_enum, default_value_t)]
        format: Format,
    },
    /// Load a snapshot and run every validation pipeline
    Verify {
        path: PathBuf,
        #[arg(short, long, value_enum, default_value_t)]
        format: Format,
    },
    /// Hex-dump the encoded default field block of a built-in node
    Defaults { class_type: String },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Catalog { node_type } => run_catalog(node_type),
        Command::Export { path, format } => run_export(&path, format),
        Command::Verify { path, format } => run_verify(&path, format),
        Command::Defaults { class_type } => run_defaults(&class_type),
    }
}

fn run_catalog(filter: Option<NodeType>) {
    let template = NodeTemplate::with_builtins();
    let nodes: Vec<&NodeDefine> = match filter {
        Some(node_type) => template.get_node_defines(node_type),
        None => template.nodes().iter().collect(),
    };

    let mut per_kind: AHashMap<NodeType, usize> = AHashMap::new();
    for node in &nodes {
        *per_kind.entry(node.node_type).or_default() += 1;
        println!("{:<20} {:<10} {}", node.class_type, node.node_type, node.label);
        for field in &node.fields {
            println!(
                "    {:<16} {:<12} default = {}",
                field.field_name,
                field.field_type(),
                field.default_value()
            );
        }
    }

    println!("\n--- Catalog Summary ---");
    for kind in NodeType::ALL {
        if let Some(count) = per_kind.get(&kind) {
            println!("{:<10} {}", kind, count);
        }
    }
    println!("Enums: {}", template.enums().len());
}

fn run_export(path: &PathBuf, format: Format) {
    let template = NodeTemplate::with_builtins();
    let result = match format {
        Format::Bin => template.save(path),
        Format::Json => template.save_json(path),
    };
    result.unwrap_or_else(|e| exit_with_error(&format!("Export failed: {}", e)));
    println!(
        "Wrote {} nodes and {} enums to '{}'",
        template.nodes().len(),
        template.enums().len(),
        path.display()
    );
}

fn run_verify(path: &PathBuf, format: Format) {
    let loaded = match format {
        Format::Bin => NodeTemplate::from_file(path),
        Format::Json => NodeTemplate::from_json_file(path),
    };
    let template = loaded.unwrap_or_else(|e| exit_with_error(&format!("Load failed: {}", e)));

    let info = template.verify_all();
    if info.has_error() {
        exit_with_error(&format!("Verification failed: {}", info.msg()));
    }
    println!(
        "Template OK: {} nodes, {} enums, {} global variables",
        template.nodes().len(),
        template.enums().len(),
        template.global_variable().len()
    );
}

fn run_defaults(class_type: &str) {
    let template = NodeTemplate::with_builtins();
    let node = template
        .find_node(class_type)
        .unwrap_or_else(|| exit_with_error(&format!("Unknown class type '{}'", class_type)));

    let mut writer = ByteWriter::new();
    node.write_defaults(&mut writer)
        .unwrap_or_else(|e| exit_with_error(&format!("Encoding failed: {}", e)));

    println!("{} ({} bytes)", node.class_type, writer.len());
    for chunk in writer.as_bytes().chunks(16) {
        let line: Vec<String> = chunk.iter().map(|b| format!("{:02x}", b)).collect();
        println!("  {}", line.join(" "));
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
