#![no_main]

use libfuzzer_sys::fuzz_target;

use cuboid_algebra::math::Cuboid;
use cuboid_tool::Script;

fuzz_target!(|text: &str| {
    // Looking for panics in parsing; building is covered by other targets.
    if let Ok(script) = text.parse::<Script>() {
        for instruction in script.instructions() {
            assert_eq!(
                instruction.cuboid.to_string().parse::<Cuboid>().ok(),
                Some(instruction.cuboid),
            );
        }
    }
});
