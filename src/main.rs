use bevy::{prelude::*, window::WindowResolution};

mod editor;
mod tiles;

use editor::{EditorConfig, EditorPlugin};

fn main() {
    let config = EditorConfig::default();
    let window_size = config.window_size();

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(ImagePlugin::default_nearest())
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Level Editor".to_string(),
                        resolution: WindowResolution::new(window_size.x, window_size.y),
                        resizable: false,
                        ..default()
                    }),
                    ..default()
                }),
        )
        .insert_resource(ClearColor(Color::WHITE))
        .insert_resource(config)
        .add_plugins(EditorPlugin)
        .run();
}
