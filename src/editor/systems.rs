use super::render::{DrawCommand, DrawList};
use super::{EditorConfig, EditorController, EditorInput, EditorPhase};
use crate::tiles::{startup_gate, TileAtlas};
use bevy::prelude::*;
use bevy::window::{CursorMoved, PrimaryWindow};

/// Colour of the grid lines
const GRID_LINE_COLOR: Color = Color::srgb(0.25, 0.25, 0.25);

/// Marker component for sprites spawned by the render pass
#[derive(Component)]
pub struct TileSprite;

pub fn spawn_camera(mut commands: Commands) {
    commands.spawn((Camera2d, Transform::from_xyz(0.0, 0.0, 999.0)));
}

/// Request every tile image; editing waits until they have all loaded
pub fn load_tile_images(mut commands: Commands, asset_server: Res<AssetServer>) {
    let atlas = TileAtlas::load_all(&asset_server);
    info!("Requested {} tile images", atlas.len());
    commands.insert_resource(atlas);
}

/// Move to editing once all tile images are in, exit if any failed
pub fn check_tile_images(
    atlas: Res<TileAtlas>,
    asset_server: Res<AssetServer>,
    mut next_phase: ResMut<NextState<EditorPhase>>,
    mut exit: MessageWriter<AppExit>,
) {
    match startup_gate(atlas.statuses(&asset_server)) {
        Ok(true) => {
            info!("All tile images loaded, starting editor");
            next_phase.set(EditorPhase::Editing);
        }
        Ok(false) => {}
        Err(e) => {
            error!("Editor startup aborted: {}", e);
            exit.write(AppExit::error());
        }
    }
}

/// Create the editing session when loading completes
pub fn start_session(mut commands: Commands, config: Res<EditorConfig>, time: Res<Time>) {
    let controller = EditorController::new(&config, time.elapsed_secs_f64());
    info!(
        "Editing {}x{} map, tile size {}, camera at {:?}",
        config.cols,
        config.rows,
        config.tile_size,
        controller.camera().position()
    );
    commands.insert_resource(controller);
}

/// Translate this frame's bevy input into queued editor inputs
pub fn collect_input(
    mut controller: ResMut<EditorController>,
    config: Res<EditorConfig>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    mut cursor_events: MessageReader<CursorMoved>,
) {
    let mut pointer = controller.pointer();
    for event in cursor_events.read() {
        pointer = event.position;
        controller.push_input(EditorInput::PointerMoved(pointer));
    }

    for key in config.bindings.all() {
        if keyboard.just_pressed(key) {
            controller.push_input(EditorInput::KeyDown(key));
        }
        if keyboard.just_released(key) {
            controller.push_input(EditorInput::KeyUp(key));
        }
    }

    // Clicks on the palette panel are handled by its buttons
    if mouse.just_pressed(MouseButton::Left) && config.on_canvas(pointer) {
        controller.push_input(EditorInput::Click);
    }
}

pub fn tick_editor(time: Res<Time>, mut controller: ResMut<EditorController>) {
    if let Err(e) = controller.tick(time.elapsed_secs_f64()) {
        error!("Editor tick failed: {}", e);
    }
}

/// Canvas pixel (origin top-left, y down) to world position for the centred 2D camera
pub fn canvas_to_world(point: Vec2, window_size: Vec2) -> Vec2 {
    Vec2::new(point.x - window_size.x / 2.0, window_size.y / 2.0 - point.y)
}

/// Replay the editor's draw calls as sprites and gizmo lines
pub fn draw_frame(
    mut commands: Commands,
    controller: Res<EditorController>,
    atlas: Res<TileAtlas>,
    window: Single<&Window, With<PrimaryWindow>>,
    existing: Query<Entity, With<TileSprite>>,
    mut gizmos: Gizmos,
) {
    let mut list = DrawList::default();
    controller.render(&mut list);
    let window_size = window.size();

    for command in list.commands {
        match command {
            DrawCommand::Clear(_) => {
                for entity in existing.iter() {
                    commands.entity(entity).despawn();
                }
            }
            DrawCommand::Image { kind, dest } => {
                let Some(image) = atlas.get(kind) else {
                    debug!("No image for tile '{}', skipping", kind.asset_key());
                    continue;
                };
                let center = canvas_to_world(dest.center(), window_size);
                commands.spawn((
                    TileSprite,
                    Sprite {
                        image: image.clone(),
                        custom_size: Some(dest.size()),
                        ..default()
                    },
                    Transform::from_translation(center.extend(0.0)),
                ));
            }
            DrawCommand::Line { from, to } => {
                gizmos.line_2d(
                    canvas_to_world(from, window_size),
                    canvas_to_world(to, window_size),
                    GRID_LINE_COLOR,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_to_world() {
        let window = Vec2::new(608.0, 512.0);
        assert_eq!(canvas_to_world(Vec2::ZERO, window), Vec2::new(-304.0, 256.0));
        assert_eq!(canvas_to_world(Vec2::new(304.0, 256.0), window), Vec2::ZERO);
        assert_eq!(canvas_to_world(Vec2::new(512.0, 512.0), window), Vec2::new(208.0, -256.0));
    }
}
