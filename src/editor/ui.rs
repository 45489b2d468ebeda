use super::{EditorConfig, EditorController};
use crate::tiles::{TileAtlas, TileKind};
use bevy::picking::Pickable;
use bevy::prelude::*;

const PANEL_COLOR: Color = Color::srgb(0.15, 0.15, 0.2);
const BUTTON_IDLE: Color = Color::srgb(0.2, 0.2, 0.3);
const BUTTON_SELECTED: Color = Color::srgb(0.2, 0.4, 0.2);

/// Palette button placing one tile kind
#[derive(Component)]
pub struct PaletteButton(pub TileKind);

/// Marker for the status line under the palette
#[derive(Component)]
pub struct StatusText;

/// Sets up the tile palette to the right of the canvas
pub fn setup_palette_ui(mut commands: Commands, atlas: Res<TileAtlas>, config: Res<EditorConfig>) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(config.viewport.x),
                top: Val::Px(0.0),
                bottom: Val::Px(0.0),
                width: Val::Px(config.palette_width),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                padding: UiRect::all(Val::Px(8.0)),
                row_gap: Val::Px(10.0),
                ..default()
            },
            BackgroundColor(PANEL_COLOR),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Tiles"),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));

            for kind in TileKind::ALL {
                parent
                    .spawn((
                        Button,
                        PaletteButton(kind),
                        Node {
                            width: Val::Px(64.0),
                            height: Val::Px(64.0),
                            display: Display::Flex,
                            justify_content: JustifyContent::Center,
                            align_items: AlignItems::Center,
                            border: UiRect::all(Val::Px(2.0)),
                            ..default()
                        },
                        BackgroundColor(BUTTON_IDLE),
                        BorderColor::all(Color::srgb(0.4, 0.4, 0.6)),
                        BorderRadius::all(Val::Px(4.0)),
                    ))
                    .observe(select_palette_tile)
                    .with_children(|button| {
                        // The image must not swallow the click meant for the button
                        if let Some(image) = atlas.get(kind) {
                            button.spawn((
                                ImageNode::new(image.clone()),
                                Node {
                                    width: Val::Px(48.0),
                                    height: Val::Px(48.0),
                                    ..default()
                                },
                                Pickable::IGNORE,
                            ));
                        }
                    });
            }

            parent.spawn((
                StatusText,
                Text::new(""),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.8, 0.8)),
            ));
        });
}

fn select_palette_tile(
    trigger: On<Pointer<Click>>,
    buttons: Query<&PaletteButton>,
    mut controller: ResMut<EditorController>,
) {
    if let Ok(button) = buttons.get(trigger.entity) {
        controller.select_tile(Some(button.0));
        info!("Selected tile {}", button.0.label());
    }
}

/// Status line: selected tile and camera position
pub fn status_line(controller: &EditorController) -> String {
    let tile = controller.selected_tile().map_or("none", TileKind::label);
    let camera = controller.camera().position();
    format!("Tile: {}\nCamera: {:.0}, {:.0}", tile, camera.x, camera.y)
}

/// Highlight the selected button and refresh the status line
pub fn update_palette(
    controller: Res<EditorController>,
    mut buttons: Query<(&PaletteButton, &mut BackgroundColor)>,
    mut status: Query<&mut Text, With<StatusText>>,
) {
    let selected = controller.selected_tile();
    for (button, mut background) in buttons.iter_mut() {
        let color = if selected == Some(button.0) {
            BUTTON_SELECTED
        } else {
            BUTTON_IDLE
        };
        background.set_if_neq(BackgroundColor(color));
    }

    let line = status_line(&controller);
    for mut text in status.iter_mut() {
        if text.0 != line {
            text.0 = line.clone();
        }
    }
}
