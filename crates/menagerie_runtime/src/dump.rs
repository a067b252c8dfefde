//! Plain-text rendering of the whole world, for `--dump-world`.

use std::fmt::Write;

use menagerie_storage::World;

/// Renders every container and the name directory.
#[must_use]
pub fn render_world(world: &World) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "=== World (day {}, {} animals) ===",
        world.day(),
        world.animal_count()
    );

    for container in world.containers() {
        if container.is_empty() {
            let _ = writeln!(out, "{}: (empty)", container.slot());
            continue;
        }
        let _ = writeln!(out, "{}:", container.slot());
        for (position, animal) in container.iter().enumerate() {
            let _ = writeln!(out, "  {position}: {animal}");
        }
    }

    if !world.directory().is_empty() {
        let _ = writeln!(out, "Directory:");
        for (name, entry) in world.directory() {
            let _ = writeln!(out, "  {name} -> {} ({})", entry.slot, entry.variant);
        }
    }

    out
}
