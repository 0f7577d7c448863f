use bevy::prelude::*;

use super::components::*;
use super::theme::UiTheme;
use crate::inventory::SlotPos;
use crate::registry::InventoryConfig;

/// Spawns the whole inventory screen: resolution bar on top, slot grid in
/// the middle, selection label and action affordances at the bottom.
pub fn spawn_panel(mut commands: Commands, theme: Res<UiTheme>, config: Res<InventoryConfig>) {
    let colors = &theme.colors;
    let grid = &theme.grid;

    let grid_width =
        config.columns as f32 * grid.slot_size + (config.columns - 1) as f32 * grid.gap;
    let grid_height = config.rows as f32 * grid.slot_size + (config.rows - 1) as f32 * grid.gap;

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::SpaceBetween,
                align_items: AlignItems::Center,
                padding: UiRect::all(Val::Px(grid.padding)),
                ..default()
            },
            BackgroundColor(Color::from(colors.bg_dark.clone())),
        ))
        .with_children(|root| {
            spawn_resolution_bar(root, &theme);

            // Slot grid
            root.spawn((
                Node {
                    width: Val::Px(grid_width),
                    height: Val::Px(grid_height),
                    display: Display::Grid,
                    grid_template_columns: vec![GridTrack::px(grid.slot_size); config.columns],
                    grid_template_rows: vec![GridTrack::px(grid.slot_size); config.rows],
                    column_gap: Val::Px(grid.gap),
                    row_gap: Val::Px(grid.gap),
                    ..default()
                },
            ))
            .with_children(|grid_parent| {
                for row in 0..config.rows {
                    for col in 0..config.columns {
                        spawn_slot(grid_parent, &theme, SlotPos::new(row, col));
                    }
                }
            });

            spawn_action_bar(root, &theme);
        });
}

fn spawn_slot(parent: &mut ChildSpawnerCommands<'_>, theme: &UiTheme, pos: SlotPos) {
    let grid = &theme.grid;
    let colors = &theme.colors;

    parent
        .spawn((
            UiSlot { pos },
            Node {
                width: Val::Px(grid.slot_size),
                height: Val::Px(grid.slot_size),
                border: UiRect::all(Val::Px(grid.border_width)),
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                ..default()
            },
            BackgroundColor(Color::from(colors.bg_medium.clone())),
            BorderColor::all(Color::from(colors.border.clone())),
        ))
        .with_children(|slot_parent| {
            slot_parent.spawn((
                SlotIcon,
                ImageNode::default(),
                Node {
                    width: Val::Percent(80.0),
                    height: Val::Percent(80.0),
                    ..default()
                },
                Visibility::Hidden,
            ));
        });
}

fn spawn_resolution_bar(parent: &mut ChildSpawnerCommands<'_>, theme: &UiTheme) {
    let colors = &theme.colors;

    parent
        .spawn(Node {
            width: Val::Percent(100.0),
            flex_direction: FlexDirection::Row,
            justify_content: JustifyContent::SpaceBetween,
            align_items: AlignItems::Center,
            ..default()
        })
        .with_children(|bar| {
            bar.spawn((
                PrevResolutionLabel,
                Text::new(""),
                TextFont {
                    font_size: theme.font_size,
                    ..default()
                },
                TextColor(Color::from(colors.text_dim.clone())),
            ));
            bar.spawn((
                CurrentResolutionLabel,
                Text::new(""),
                TextFont {
                    font_size: theme.font_size,
                    ..default()
                },
                TextColor(Color::from(colors.text.clone())),
            ));
            bar.spawn((
                NextResolutionLabel,
                Text::new(""),
                TextFont {
                    font_size: theme.font_size,
                    ..default()
                },
                TextColor(Color::from(colors.text_dim.clone())),
            ));
        });
}

fn spawn_action_bar(parent: &mut ChildSpawnerCommands<'_>, theme: &UiTheme) {
    let colors = &theme.colors;

    parent
        .spawn(Node {
            width: Val::Percent(100.0),
            flex_direction: FlexDirection::Row,
            justify_content: JustifyContent::SpaceBetween,
            align_items: AlignItems::Center,
            column_gap: Val::Px(12.0),
            ..default()
        })
        .with_children(|bar| {
            bar.spawn((
                SelectionLabel,
                Text::new(""),
                TextFont {
                    font_size: theme.font_size,
                    ..default()
                },
                TextColor(Color::from(colors.text.clone())),
            ));

            for (button, badge) in [
                (ActionButton::Primary, "A"),
                (ActionButton::Secondary, "Y"),
            ] {
                bar.spawn(Node {
                    flex_direction: FlexDirection::Row,
                    align_items: AlignItems::Center,
                    column_gap: Val::Px(6.0),
                    ..default()
                })
                .with_children(|pair| {
                    pair.spawn((
                        ActionIcon(button),
                        Node {
                            width: Val::Px(24.0),
                            height: Val::Px(24.0),
                            align_items: AlignItems::Center,
                            justify_content: JustifyContent::Center,
                            ..default()
                        },
                        BackgroundColor(Color::from(colors.bg_medium.clone())),
                    ))
                    .with_children(|icon| {
                        icon.spawn((
                            Text::new(badge),
                            TextFont {
                                font_size: theme.font_size * 0.8,
                                ..default()
                            },
                            TextColor(Color::from(colors.text_dim.clone())),
                        ));
                    });
                    pair.spawn((
                        ActionLabel(button),
                        Text::new(""),
                        TextFont {
                            font_size: theme.font_size,
                            ..default()
                        },
                        TextColor(Color::from(colors.text.clone())),
                    ));
                });
            }
        });
}
