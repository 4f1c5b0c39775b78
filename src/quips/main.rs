use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use quips::api::{CmdMessage, MessageLevel, QuipsApi};
use quips::clipboard::{copy_to_clipboard, CopyAck};
use quips::config::QuipsConfig;
use quips::editor::{edit_content, EditorContent};
use quips::error::{QuipsError, Result};
use quips::model::{Snippet, SnippetDraft};
use quips::store::fs::FileStore;
use std::env;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: QuipsApi<FileStore>,
    config: QuipsConfig,
    home: PathBuf,
    ack: CopyAck,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add {
            title,
            content,
            category,
            no_editor,
        }) => handle_add(&mut ctx, title, content, category, no_editor),
        Some(Commands::List { term }) => handle_list(&ctx, term),
        Some(Commands::Search { term }) => handle_list(&ctx, Some(term)),
        Some(Commands::Show { position }) => handle_show(&ctx, position),
        Some(Commands::Copy { position }) => handle_copy(&mut ctx, position),
        Some(Commands::Edit {
            position,
            category,
            title,
            content,
            no_editor,
        }) => handle_edit(&mut ctx, position, category, title, content, no_editor),
        Some(Commands::Delete { position, yes }) => handle_delete(&mut ctx, position, yes),
        Some(Commands::Clear { yes }) => handle_clear(&mut ctx, yes),
        Some(Commands::Import { file }) => handle_import(&mut ctx, file),
        Some(Commands::Export { output }) => handle_export(&ctx, output),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        None => handle_list(&ctx, None),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let home = match cli
        .home
        .clone()
        .or_else(|| env::var_os("QUIPS_HOME").map(PathBuf::from))
    {
        Some(dir) => dir,
        None => ProjectDirs::from("com", "quips", "quips")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| {
                QuipsError::Store("Could not determine a data directory".to_string())
            })?,
    };

    let config = QuipsConfig::load(&home).unwrap_or_default();
    let api = QuipsApi::new(FileStore::new(home.clone()));

    Ok(AppContext {
        api,
        config,
        home,
        ack: CopyAck::new(),
    })
}

fn handle_add(
    ctx: &mut AppContext,
    title: Option<String>,
    content: Option<String>,
    category: Option<String>,
    no_editor: bool,
) -> Result<()> {
    let (final_title, final_content) = if no_editor {
        (title, content)
    } else {
        let initial = EditorContent::new(title.unwrap_or_default(), content.unwrap_or_default());
        let edited = edit_content(&initial)?;
        if edited.title.is_empty() {
            return Err(QuipsError::Api("Title cannot be empty".into()));
        }
        (Some(edited.title), Some(edited.content))
    };

    let result = ctx
        .api
        .add_snippet(SnippetDraft::new(category, final_title, final_content))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, term: Option<String>) -> Result<()> {
    let result = ctx.api.list_snippets(term.as_deref().unwrap_or(""))?;
    print_groups(&result.groups);
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &AppContext, position: usize) -> Result<()> {
    let result = ctx.api.view_snippet(position)?;
    for snippet in &result.affected {
        print_snippet(snippet);
    }
    Ok(())
}

fn handle_copy(ctx: &mut AppContext, position: usize) -> Result<()> {
    let mut result = ctx.api.view_snippet(position)?;
    let snippet = result.affected.remove(0);

    if let Err(e) = copy_to_clipboard(&snippet.content) {
        eprintln!("Warning: Failed to copy to clipboard: {}", e);
        return Ok(());
    }

    ctx.ack.mark(snippet.id);
    let marker = if ctx.ack.current() == Some(snippet.id) {
        "✓ "
    } else {
        ""
    };
    println!(
        "{}",
        format!("{}Copied \"{}\" to clipboard", marker, snippet.title).green()
    );
    Ok(())
}

fn handle_edit(
    ctx: &mut AppContext,
    position: usize,
    category: Option<String>,
    title: Option<String>,
    content: Option<String>,
    no_editor: bool,
) -> Result<()> {
    let mut current = ctx.api.view_snippet(position)?;
    let snippet = current.affected.remove(0);

    // Flags replace fields directly; otherwise the editor opens on the
    // title/content buffer and the category is kept.
    let draft = if no_editor || category.is_some() || title.is_some() || content.is_some() {
        SnippetDraft::new(
            Some(category.unwrap_or_else(|| snippet.category.clone())),
            Some(title.unwrap_or_else(|| snippet.title.clone())),
            Some(content.unwrap_or_else(|| snippet.content.clone())),
        )
    } else {
        let initial = EditorContent::new(snippet.title.clone(), snippet.content.clone());
        let edited = edit_content(&initial)?;
        if edited.title.is_empty() {
            return Err(QuipsError::Api("Title cannot be empty".into()));
        }
        SnippetDraft::new(
            Some(snippet.category.clone()),
            Some(edited.title),
            Some(edited.content),
        )
    };

    let result = ctx.api.edit_snippet(position, draft)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, position: usize, yes: bool) -> Result<()> {
    let result = ctx.api.delete_snippet(position, yes)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_clear(ctx: &mut AppContext, yes: bool) -> Result<()> {
    let result = ctx.api.clear_snippets(yes)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_import(ctx: &mut AppContext, file: PathBuf) -> Result<()> {
    let result = ctx
        .api
        .import_snippets(&file, ctx.config.delimiter_byte())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &AppContext, output: Option<PathBuf>) -> Result<()> {
    let target = output.unwrap_or_else(|| PathBuf::from(&ctx.config.export_file));
    let result = ctx.api.export_snippets(&target)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    match (key.as_deref(), value) {
        (None, _) => {
            println!("export-file = {}", ctx.config.export_file);
            println!("import-delimiter = {:?}", ctx.config.import_delimiter);
        }
        (Some("export-file"), None) => println!("export-file = {}", ctx.config.export_file),
        (Some("export-file"), Some(v)) => {
            ctx.config.export_file = v;
            ctx.config.save(&ctx.home)?;
            println!("export-file = {}", ctx.config.export_file);
        }
        (Some("import-delimiter"), None) => {
            println!("import-delimiter = {:?}", ctx.config.import_delimiter)
        }
        (Some("import-delimiter"), Some(v)) => {
            ctx.config.set_import_delimiter(&v)?;
            ctx.config.save(&ctx.home)?;
            println!("import-delimiter = {:?}", ctx.config.import_delimiter);
        }
        (Some(other), _) => println!("Unknown config key: {}", other),
    }
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const LINE_WIDTH: usize = 100;

fn print_groups(groups: &[(String, Vec<Snippet>)]) {
    if groups.is_empty() {
        println!("No snippets found.");
        return;
    }

    let mut position = 1;
    let mut first = true;
    for (category, snippets) in groups {
        if !first {
            println!();
        }
        first = false;

        println!("{}", category.bold().cyan());
        for snippet in snippets {
            let idx_str = format!("{:>3}. ", position);
            let preview: String = snippet
                .content
                .chars()
                .map(|c| if c == '\n' { ' ' } else { c })
                .collect();

            let available = LINE_WIDTH
                .saturating_sub(idx_str.len() + snippet.title.width() + 2);
            let preview = truncate_to_width(&preview, available);

            if preview.is_empty() {
                println!("{}{}", idx_str, snippet.title.bold());
            } else {
                println!("{}{}  {}", idx_str, snippet.title.bold(), preview.dimmed());
            }
            position += 1;
        }
    }
}

fn print_snippet(snippet: &Snippet) {
    println!(
        "{} {}",
        format!("[{}]", snippet.category).cyan(),
        snippet.title.bold()
    );
    println!("--------------------------------");
    println!("{}", snippet.content);
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
