//! CLI Command Handlers
//!
//! Each handler takes CLI args, the catalog and Output, and returns ExitCode.
//! JSON mode prints the data envelope; a terminal gets a plain table.

use tracing::debug;

use crate::catalog::Catalog;
use crate::cli::{CatalogCmd, CategoryEntry, ExitCode, InfoCmd, Output, ScreenModeEntry};
use crate::models::{CategoryFilter, ContentItem, ScreenMode};

/// Print `data` as JSON, or `lines` on a terminal
fn emit<T, L>(output: &Output, data: &T, lines: L) -> ExitCode
where
    T: serde::Serialize,
    L: FnOnce() -> Vec<String>,
{
    if output.json {
        if let Err(e) = output.print(data) {
            return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
        }
    } else {
        output.print_lines(lines());
    }
    ExitCode::Success
}

/// One table line for a catalog item
pub fn item_line(item: &ContentItem) -> String {
    let extra = match (item.rating(), item.epg()) {
        (Some(rating), _) => format!("★ {:.1}", rating),
        (None, Some(epg)) => format!("Now: {} / Next: {}", epg.current, epg.next),
        (None, None) => String::new(),
    };
    format!(
        "{:<10} {:<22} {:<14} {:<10} {}",
        item.id.to_string(),
        item.title,
        item.genre,
        item.duration_label(),
        extra
    )
}

// =============================================================================
// Catalog Command
// =============================================================================

pub fn catalog_cmd(cmd: CatalogCmd, catalog: &Catalog, output: &Output) -> ExitCode {
    let items = catalog.filter(cmd.category);
    debug!(category = cmd.category.key(), count = items.len(), "catalog listed");
    output.info(format!("{} ({} items)", cmd.category.row_title(), items.len()));

    emit(output, &items, || items.iter().map(item_line).collect())
}

// =============================================================================
// Info Command
// =============================================================================

pub fn info_cmd(cmd: InfoCmd, catalog: &Catalog, output: &Output) -> ExitCode {
    let id = match cmd.content_id() {
        Ok(id) => id,
        Err(e) => return output.error(e, ExitCode::InvalidArgs),
    };

    match catalog.get(id) {
        Ok(item) => emit(output, item, || {
            let mut lines = vec![
                format!("{} [{}]", item.title, item.kind()),
                format!("{} • {}", item.meta_line(), item.duration_label()),
                item.description.clone(),
            ];
            if let Some(epg) = item.epg() {
                lines.push(format!("Now: {} ({})", epg.current, epg.time_slot));
                lines.push(format!("Next: {}", epg.next));
            }
            lines.push(format!("Stream: {}", item.media_url));
            lines
        }),
        Err(e) => output.error(e.to_string(), ExitCode::InvalidArgs),
    }
}

// =============================================================================
// Categories / Screen Modes
// =============================================================================

pub fn categories_cmd(output: &Output) -> ExitCode {
    let entries: Vec<CategoryEntry> = CategoryFilter::ALL.into_iter().map(Into::into).collect();
    emit(output, &entries, || {
        entries
            .iter()
            .map(|e| format!("{:<8} {:<9} row: {}", e.key, e.label, e.row_title))
            .collect()
    })
}

pub fn screen_modes_cmd(output: &Output) -> ExitCode {
    let entries: Vec<ScreenModeEntry> = ScreenMode::ALL.into_iter().map(Into::into).collect();
    emit(output, &entries, || {
        entries
            .iter()
            .map(|e| format!("{:<9} {:<12} {} (next: {})", e.key, e.name, e.description, e.next))
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ContentId;

    fn quiet_output() -> Output {
        Output {
            json: false,
            quiet: true,
        }
    }

    #[test]
    fn test_item_line_columns() {
        let catalog = Catalog::builtin();
        let line = item_line(catalog.get(ContentId::movie(2)).unwrap());
        assert!(line.starts_with("movie-2"));
        assert!(line.contains("Inception"));
        assert!(line.contains("148 min"));
        assert!(line.ends_with("★ 8.8"));

        let line = item_line(catalog.get(ContentId::live(1)).unwrap());
        assert!(line.contains("LIVE"));
        assert!(line.contains("Next: "));
    }

    #[test]
    fn test_info_unknown_id_is_invalid_args() {
        let catalog = Catalog::builtin();
        let cmd = InfoCmd {
            id: "movie-42".into(),
        };
        assert_eq!(
            info_cmd(cmd, &catalog, &quiet_output()),
            ExitCode::InvalidArgs
        );

        let cmd = InfoCmd { id: "42".into() };
        assert_eq!(
            info_cmd(cmd, &catalog, &quiet_output()),
            ExitCode::InvalidArgs
        );
    }

    #[test]
    fn test_listing_commands_succeed() {
        let catalog = Catalog::builtin();
        let output = quiet_output();
        let cmd = CatalogCmd {
            category: CategoryFilter::News,
        };
        assert_eq!(catalog_cmd(cmd, &catalog, &output), ExitCode::Success);
        assert_eq!(categories_cmd(&output), ExitCode::Success);
        assert_eq!(screen_modes_cmd(&output), ExitCode::Success);
    }
}
