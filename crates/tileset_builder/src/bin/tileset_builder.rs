//! Standalone tileset builder binary
//!
//! Run with: tileset_builder [--tile-size N] <image> [icon...]
//!
//! Icons are indexed by terrain code, the first one standing for code 0.
//! Without an image the last opened one is reloaded.

use bevy::asset::{AssetPlugin, UnapprovedPathMode};
use bevy::image::{ImageFilterMode, ImageSamplerDescriptor};
use bevy::prelude::*;
use bevy::window::WindowResolution;
use clap::Parser;
use std::path::PathBuf;
use tileset_builder::TilesetBuilderPlugin;

#[derive(Parser, Debug, PartialEq)]
#[command(version, about = "Group tileset tiles into templates and classify their terrain")]
struct LaunchArgs {
    /// Tileset image to open
    #[arg(value_name = "IMAGE")]
    image: Option<PathBuf>,

    /// Tile edge length in pixels
    #[arg(short, long, value_name = "PIXELS")]
    tile_size: Option<u32>,

    /// Terrain icons, one per terrain code starting at 0
    #[arg(value_name = "ICON")]
    icons: Vec<PathBuf>,
}

fn main() {
    let launch = LaunchArgs::parse();

    let mut plugin = TilesetBuilderPlugin::new().with_icons(launch.icons);
    if let Some(image) = launch.image {
        plugin = plugin.with_image(image);
    }
    if let Some(tile_size) = launch.tile_size {
        plugin = plugin.with_tile_size(tile_size);
    }

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Tileset Builder".to_string(),
                        resolution: WindowResolution::new(1280, 800)
                            .with_scale_factor_override(1.0),
                        ..default()
                    }),
                    ..default()
                })
                .set(ImagePlugin {
                    // Nearest sampling keeps tile pixels crisp when zoomed
                    default_sampler: ImageSamplerDescriptor {
                        mag_filter: ImageFilterMode::Nearest,
                        min_filter: ImageFilterMode::Nearest,
                        mipmap_filter: ImageFilterMode::Nearest,
                        ..default()
                    },
                })
                .set(AssetPlugin {
                    // Tilesets are opened from anywhere on disk
                    unapproved_path_mode: UnapprovedPathMode::Allow,
                    ..default()
                }),
        )
        .add_plugins(plugin)
        .run();
}
