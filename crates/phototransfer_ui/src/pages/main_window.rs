//! Main window view.
//!
//! Destination tree on the left, memory card listing on the right, status
//! and log underneath.

use iced::widget::{
    button, column, container, pick_list, progress_bar, row, scrollable, text, text_input, Column,
};
use iced::{Alignment, Element, Length, Padding};

use phototransfer_core::models::{format_size, CollisionPolicy, FileEntry, TransferMode};

use crate::app::{App, Message};
use crate::handlers::TreeRow;
use crate::theme::{colors, font, spacing};

/// Build the main window view.
pub fn view(app: &App) -> Element<'_, Message> {
    let panels = row![destination_panel(app), source_panel(app)]
        .spacing(spacing::LG)
        .height(Length::FillPortion(3));

    let content = column![panels, status_bar(app), log_section(app)]
        .spacing(spacing::MD)
        .padding(spacing::LG);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Destination tree plus the new-folder row.
fn destination_panel(app: &App) -> Element<'_, Message> {
    let header = text("Destination").size(font::HEADER);
    let target = text(format!("Into: {}", app.current_destination().display()))
        .size(font::SM)
        .color(colors::TEXT_SECONDARY);

    let root_row = button(text(app.destination_root.display().to_string()).size(font::NORMAL))
        .on_press(Message::NodeHighlighted(app.destination_root.clone()))
        .style(if app.highlighted.as_ref() == Some(&app.destination_root) {
            button::primary
        } else {
            button::text
        })
        .width(Length::Fill);

    let root: Element<'_, Message> = root_row.into();
    let rows = app.tree_rows.iter().map(|row| tree_row(app, row));
    let tree = scrollable(Column::with_children(std::iter::once(root).chain(rows)).spacing(2.0))
        .height(Length::Fill);

    let can_create = !app.is_transferring() && !app.new_folder_name.trim().is_empty();
    let new_folder = row![
        text_input("New folder name", &app.new_folder_name)
            .on_input(Message::NewFolderNameChanged)
            .on_submit(Message::CreateFolder)
            .size(font::NORMAL)
            .width(Length::Fill),
        button(text("Create Folder").size(font::NORMAL))
            .on_press_maybe(can_create.then_some(Message::CreateFolder))
            .padding([spacing::XS, spacing::SM]),
    ]
    .spacing(spacing::SM)
    .align_y(Alignment::Center);

    container(
        column![header, target, tree, new_folder]
            .spacing(spacing::SM)
            .height(Length::Fill),
    )
    .padding(spacing::MD)
    .style(container::bordered_box)
    .width(Length::FillPortion(2))
    .height(Length::Fill)
    .into()
}

/// One indented node: expander for folders, then the name.
fn tree_row<'a>(app: &'a App, row: &'a TreeRow) -> Element<'a, Message> {
    let node = &row.node;
    let indent = spacing::INDENT * (row.depth as f32 + 1.0);

    let expander: Element<'a, Message> = if node.is_dir {
        button(text(if row.expanded { "-" } else { "+" }).size(font::SM))
            .on_press(Message::NodeExpandToggled(node.path.clone()))
            .style(button::text)
            .padding([0.0, spacing::XS])
            .into()
    } else {
        text("  ").size(font::SM).into()
    };

    let is_highlighted = app.highlighted.as_ref() == Some(&node.path);
    let label = text(node.name.as_str())
        .size(font::NORMAL)
        .color(if node.is_dir {
            colors::FOLDER
        } else {
            colors::TEXT_PRIMARY
        });
    let name = button(label)
        .on_press(Message::NodeHighlighted(node.path.clone()))
        .style(if is_highlighted {
            button::primary
        } else {
            button::text
        })
        .width(Length::Fill);

    container(row![expander, name].spacing(spacing::XS).align_y(Alignment::Center))
        .padding(Padding {
            top: 0.0,
            right: 0.0,
            bottom: 0.0,
            left: indent,
        })
        .into()
}

/// Window input, checkable listing and transfer controls.
fn source_panel(app: &App) -> Element<'_, Message> {
    let busy = app.is_transferring();
    let header = text("Memory Card").size(font::HEADER);

    let location = match app.listing.location.path() {
        Some(path) => text(path.display().to_string())
            .size(font::SM)
            .color(colors::TEXT_SECONDARY),
        None => text("No card found")
            .size(font::SM)
            .color(colors::WARNING),
    };

    let window_row = row![
        text("Last").size(font::NORMAL),
        text_input("1", &app.window_input)
            .on_input(Message::WindowDaysChanged)
            .on_submit(Message::RefreshSource)
            .size(font::NORMAL)
            .width(Length::Fixed(70.0)),
        text("day(s)").size(font::NORMAL),
        button(text("Refresh").size(font::NORMAL))
            .on_press_maybe((!busy).then_some(Message::RefreshSource))
            .padding([spacing::XS, spacing::SM]),
    ]
    .spacing(spacing::SM)
    .align_y(Alignment::Center);

    let entries = app
        .listing
        .entries
        .iter()
        .map(|entry| entry_row(entry, busy));
    let listing: Element<'_, Message> = if app.listing.entries.is_empty() {
        text("Nothing modified in this window")
            .size(font::NORMAL)
            .color(colors::TEXT_SECONDARY)
            .into()
    } else {
        scrollable(Column::with_children(entries).spacing(2.0))
            .height(Length::Fill)
            .into()
    };

    let selection_row = row![
        button(text("Select All").size(font::SM))
            .on_press_maybe((!busy).then_some(Message::SelectAll))
            .padding([spacing::XS, spacing::SM]),
        button(text("Select None").size(font::SM))
            .on_press_maybe((!busy).then_some(Message::SelectNone))
            .padding([spacing::XS, spacing::SM]),
        text(format!(
            "{} of {} checked",
            app.listing.selected_count(),
            app.listing.entries.len()
        ))
        .size(font::SM)
        .color(colors::TEXT_SECONDARY),
    ]
    .spacing(spacing::SM)
    .align_y(Alignment::Center);

    container(
        column![
            header,
            location,
            window_row,
            container(listing).height(Length::Fill),
            selection_row,
            transfer_row(app),
        ]
        .spacing(spacing::SM)
        .height(Length::Fill),
    )
    .padding(spacing::MD)
    .style(container::bordered_box)
    .width(Length::FillPortion(3))
    .height(Length::Fill)
    .into()
}

/// A clickable listing line; the marker shows the check state.
fn entry_row(entry: &FileEntry, busy: bool) -> Element<'_, Message> {
    let marker = if entry.selected { "[x]" } else { "[ ]" };
    let name = if entry.is_dir {
        format!("{}/", entry.name)
    } else {
        entry.name.clone()
    };
    let size = if entry.is_dir {
        String::from("-")
    } else {
        format_size(entry.size)
    };

    let line = row![
        text(marker).size(font::NORMAL).width(Length::Fixed(28.0)),
        text(name).size(font::NORMAL).width(Length::Fill),
        text(size)
            .size(font::SM)
            .color(colors::TEXT_SECONDARY)
            .width(Length::Fixed(80.0)),
        text(entry.modified_label())
            .size(font::SM)
            .color(colors::TEXT_SECONDARY)
            .width(Length::Fixed(130.0)),
    ]
    .spacing(spacing::SM)
    .align_y(Alignment::Center);

    button(line)
        .on_press_maybe((!busy).then(|| Message::EntryToggled(entry.name.clone())))
        .style(if entry.selected {
            button::secondary
        } else {
            button::text
        })
        .width(Length::Fill)
        .into()
}

/// Copy / move / cancel plus the collision picker.
fn transfer_row(app: &App) -> Element<'_, Message> {
    let busy = app.is_transferring();
    let can_start = !busy && app.listing.selected_count() > 0;

    row![
        button(text("Copy").size(font::NORMAL))
            .on_press_maybe(can_start.then_some(Message::StartTransfer(TransferMode::Copy)))
            .padding([spacing::SM, spacing::LG]),
        button(text("Move").size(font::NORMAL))
            .on_press_maybe(can_start.then_some(Message::StartTransfer(TransferMode::Move)))
            .padding([spacing::SM, spacing::LG]),
        button(text("Cancel").size(font::NORMAL))
            .on_press_maybe(busy.then_some(Message::CancelTransfer))
            .style(button::danger)
            .padding([spacing::SM, spacing::LG]),
        text("Existing files:").size(font::SM),
        pick_list(
            CollisionPolicy::ALL,
            Some(app.config.settings().transfer.collision_policy),
            Message::CollisionPolicyChanged,
        )
        .text_size(font::SM),
    ]
    .spacing(spacing::SM)
    .align_y(Alignment::Center)
    .into()
}

/// Status line, with a progress bar while a batch runs.
fn status_bar(app: &App) -> Element<'_, Message> {
    let status = text(app.status_text.as_str())
        .size(font::NORMAL)
        .color(if app.status_is_warning {
            colors::WARNING
        } else {
            colors::SUCCESS
        });

    match &app.transfer {
        Some(running) => {
            let (done, total) = {
                let progress = running.progress.lock();
                (progress.done, progress.total.max(1))
            };
            column![
                status,
                progress_bar(0.0..=total as f32, done as f32),
            ]
            .spacing(spacing::XS)
            .into()
        }
        None => status.into(),
    }
}

/// Scrolling log of batch lines.
fn log_section(app: &App) -> Element<'_, Message> {
    let lines = app
        .log_lines
        .iter()
        .map(|line| text(line.as_str()).size(font::SM).into());

    container(
        scrollable(Column::with_children(lines).width(Length::Fill)).height(Length::Fill),
    )
    .padding(spacing::SM)
    .style(container::bordered_box)
    .width(Length::Fill)
    .height(Length::FillPortion(1))
    .into()
}
