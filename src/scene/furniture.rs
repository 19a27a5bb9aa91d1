//! The fixed furniture inventory.
//!
//! One function per assembly. Every assembly brackets itself in a stack
//! scope, positions its root cube, then places child leaves (legs, panels,
//! arms) in nested scopes, so siblings always start from the parent
//! transform. Structural variants (fridge door, laptop lid, swung chairs,
//! slid stools) are fully distinct branches selected by a toggle, never
//! patched transforms.

use super::{
    builder::{DrawList, Finish},
    state::{SceneState, ToggleState},
    transform_stack::TransformStack,
};

/// Warm yellow for the lit lamp shade tier.
const LAMP_GLOW: [f32; 4] = [1.0, 1.0, 102.0 / 255.0, 1.0];

pub(crate) fn floor(stack: &mut TransformStack, list: &mut DrawList) {
    stack.scoped(|s| {
        s.scale(10.0, 0.05, 9.0);
        s.translate(0.0, -40.0, 0.0);
        list.draw_cube(s, Finish::Hardwood);
    });
}

pub(crate) fn rug(stack: &mut TransformStack, list: &mut DrawList, drift: f32) {
    stack.scoped(|s| {
        s.translate(-2.8 + drift / 2.0, -1.9, -2.5);
        s.scale(2.75, 0.01, 3.5);
        list.draw_cube(s, Finish::RugPattern);
    });
}

/// A four-legged dining chair. `back_x` picks which side carries the
/// backrest; `swivel` rotates the whole chair about its seat.
fn dining_chair(
    stack: &mut TransformStack,
    list: &mut DrawList,
    position: (f32, f32, f32),
    swivel: f32,
    back_x: f32,
) {
    stack.scoped(|s| {
        // seat
        s.translate(position.0, position.1, position.2);
        s.rotate_y(swivel);
        s.scale(0.7, 0.11, 0.7);
        list.draw_cube(s, Finish::BlueLeather);

        // back
        s.scoped(|s| {
            s.translate(back_x, 3.0, 0.0);
            s.scale(0.11, 6.0, 1.0);
            list.draw_cube(s, Finish::BlueLeather);
        });

        // legs
        for (x, z) in [(0.45, -0.45), (-0.45, 0.45), (-0.45, -0.45), (0.45, 0.45)] {
            s.scoped(|s| {
                s.translate(x, -2.5, z);
                s.scale(0.12, 6.0, 0.12);
                list.draw_cube(s, Finish::BlackWood);
            });
        }
    });
}

pub(crate) fn dining_chairs(stack: &mut TransformStack, list: &mut DrawList, state: &SceneState) {
    let swivel = -state.chairs.value() / 2.0;

    // Chairs one and four swing out when toggled; two and three follow the
    // oscillator.
    if state.toggles.dining_chairs_swung {
        dining_chair(stack, list, (-1.0, -1.35, -2.0), -45.0, 0.45);
    } else {
        dining_chair(stack, list, (-2.0, -1.35, -2.0), 0.0, 0.45);
    }
    dining_chair(stack, list, (-2.0, -1.35, -3.0), swivel, 0.45);
    dining_chair(stack, list, (-3.7, -1.35, -3.0), swivel, -0.45);
    if state.toggles.dining_chairs_swung {
        dining_chair(stack, list, (-4.3, -1.35, -2.0), 45.0, -0.45);
    } else {
        dining_chair(stack, list, (-3.7, -1.35, -2.0), 0.0, -0.45);
    }
}

pub(crate) fn dining_table(stack: &mut TransformStack, list: &mut DrawList) {
    stack.scoped(|s| {
        s.translate(-2.8, -1.1, -2.5);
        s.scale(1.5, 0.08, 2.75);
        list.draw_cube(s, Finish::Marble);

        for (x, z) in [(-0.45, 0.45), (0.45, 0.45), (-0.45, -0.45), (0.45, -0.45)] {
            s.scoped(|s| {
                s.translate(x, -5.0, z);
                s.scale(0.08, 10.0, 0.08);
                list.draw_cube(s, Finish::BlackWood);
            });
        }
    });
}

pub(crate) fn tv_console(stack: &mut TransformStack, list: &mut DrawList) {
    // stand
    stack.scoped(|s| {
        s.translate(4.6, -1.6, -2.5);
        s.scale(0.8, 0.08, 2.5);
        list.draw_cube(s, Finish::Marble);

        for (x, z) in [(0.45, 0.48), (-0.45, 0.48), (0.45, -0.48), (-0.45, -0.48)] {
            s.scoped(|s| {
                s.translate(x, -1.8, z);
                s.scale(0.12, 4.0, 0.05);
                list.draw_cube(s, Finish::BlackWood);
            });
        }
    });

    // tv: base, arm, screen panel, display
    stack.scoped(|s| {
        s.translate(4.6, -1.55, -2.5);
        s.scale(0.4, 0.08, 1.5);
        list.draw_cube(s, Finish::Marble);

        s.scoped(|s| {
            s.scale(0.1, 4.0, 0.15);
            list.draw_cube(s, Finish::Marble);
        });

        s.scoped(|s| {
            s.translate(0.0, 8.5, 0.0);
            s.scale(0.1, 14.0, 1.2);
            list.draw_cube(s, Finish::Marble);
        });

        s.scoped(|s| {
            s.translate(-0.03, 8.5, 0.0);
            s.scale(0.05, 12.5, 1.1);
            list.draw_cube(s, Finish::TvScreen);
        });
    });
}

pub(crate) fn sofa(stack: &mut TransformStack, list: &mut DrawList, drift: f32) {
    stack.scoped(|s| {
        // seat
        s.translate(1.0 + drift / 2.0, -1.55, -2.7);
        s.rotate_y(-90.0);
        s.scale(2.8, 0.35, 0.9);
        list.draw_cube(s, Finish::CremeLeather);

        // back
        s.scoped(|s| {
            s.translate(0.0, 1.0, 0.5);
            s.scale(1.0, 3.0, 0.3);
            list.draw_cube(s, Finish::CremeLeather);
        });

        // arms
        for x in [0.45, -0.45] {
            s.scoped(|s| {
                s.translate(x, 1.2, 0.0);
                s.scale(0.05, 0.35, 0.75);
                list.draw_cube(s, Finish::BlackWood);
            });
            s.scoped(|s| {
                s.translate(x, 1.0, -0.3);
                s.scale(0.05, 0.75, 0.15);
                list.draw_cube(s, Finish::BlackWood);
            });
        }

        // legs
        for (x, z) in [(-0.4, 0.56), (-0.4, -0.43), (0.4, 0.56), (0.4, -0.43)] {
            s.scoped(|s| {
                s.translate(x, -0.8, z);
                s.scale(0.05, 1.0, 0.15);
                list.draw_cube(s, Finish::BlackWood);
            });
        }
    });
}

pub(crate) fn armchair(stack: &mut TransformStack, list: &mut DrawList) {
    stack.scoped(|s| {
        s.translate(2.0, -1.55, 0.2);
        s.rotate_y(-45.0);
        s.scale(0.9, 0.35, 0.9);
        list.draw_cube(s, Finish::CremeLeather);

        s.scoped(|s| {
            s.translate(0.0, 1.0, 0.5);
            s.scale(1.0, 3.0, 0.3);
            list.draw_cube(s, Finish::CremeLeather);
        });

        for x in [0.45, -0.45] {
            s.scoped(|s| {
                s.translate(x, 1.2, 0.0);
                s.scale(0.1, 0.5, 0.75);
                list.draw_cube(s, Finish::BlackWood);
            });
            s.scoped(|s| {
                s.translate(x, 1.0, -0.3);
                s.scale(0.1, 0.75, 0.15);
                list.draw_cube(s, Finish::BlackWood);
            });
        }

        for (x, z) in [(-0.4, 0.56), (-0.4, -0.43), (0.4, 0.56), (0.4, -0.43)] {
            s.scoped(|s| {
                s.translate(x, -0.8, z);
                s.scale(0.15, 1.0, 0.15);
                list.draw_cube(s, Finish::BlackWood);
            });
        }
    });

    // throw pillow, leaned against the back
    stack.scoped(|s| {
        s.translate(1.9, -1.1, 0.4);
        s.rotate_y(-45.0);
        s.rotate_x(15.0);
        s.scale(0.55, 0.55, 0.1);
        list.draw_cube(s, Finish::NavyFabric);
    });
}

pub(crate) fn side_table(stack: &mut TransformStack, list: &mut DrawList) {
    stack.scoped(|s| {
        s.translate(1.15, -1.45, -0.4);
        s.rotate_y(-45.0);
        s.scale(0.65, 0.05, 0.65);
        list.draw_cube(s, Finish::BlackWood);

        for (x, z) in [(-0.45, 0.45), (0.45, 0.45), (-0.45, -0.45), (0.45, -0.45)] {
            s.scoped(|s| {
                s.translate(x, -5.0, z);
                s.scale(0.08, 11.0, 0.08);
                list.draw_cube(s, Finish::BlackWood);
            });
        }
    });
}

pub(crate) fn table_lamp(stack: &mut TransformStack, list: &mut DrawList) {
    stack.scoped(|s| {
        s.translate(1.15, -1.4, -0.4);
        s.rotate_y(-45.0);
        s.scale(0.25, 0.05, 0.25);
        list.draw_cube(s, Finish::WhiteLacquer);

        s.scoped(|s| {
            s.translate(0.0, 5.0, 0.0);
            s.scale(0.1, 8.0, 0.1);
            list.draw_cube(s, Finish::WhiteLacquer);
        });

        // stacked shade tiers
        for (y, extent) in [(10.0, 1.0), (12.0, 0.8), (14.0, 0.6)] {
            s.scoped(|s| {
                s.translate(0.0, y, 0.0);
                s.scale(extent, 2.0, extent);
                list.draw_cube(s, Finish::BlueLeather);
            });
        }
    });
}

pub(crate) fn floor_lamp(stack: &mut TransformStack, list: &mut DrawList, lit: bool) {
    stack.scoped(|s| {
        s.translate(0.8, -1.97, 3.95);
        s.scale(0.4, 0.05, 0.4);
        list.draw_cube(s, Finish::BlackWood);

        s.scoped(|s| {
            s.translate(0.0, 12.0, 0.0);
            s.scale(0.1, 25.0, 0.1);
            list.draw_cube(s, Finish::BlackWood);
        });

        s.scoped(|s| {
            s.translate(0.0, 26.0, 0.0);
            s.scale(1.0, 3.0, 1.0);
            list.draw_cube(s, Finish::BeigeUpholstery);
        });

        s.scoped(|s| {
            s.translate(0.0, 28.0, 0.0);
            s.scale(0.8, 2.0, 0.8);
            list.draw_cube(s, Finish::BeigeUpholstery);
        });

        // The top tier reads as the bulb: it glows flat yellow while the
        // point lights are on.
        s.scoped(|s| {
            s.translate(0.0, 30.0, 0.0);
            s.scale(0.6, 2.0, 0.6);
            if lit {
                list.draw_cube_flat(s, LAMP_GLOW);
            } else {
                list.draw_cube(s, Finish::BeigeUpholstery);
            }
        });
    });
}

/// One book leaf. `drift_divisor` of zero keeps the book in place; any
/// other value slides it left by `drift / divisor`.
struct Book {
    drift_divisor: f32,
    y: f32,
    z: f32,
}

const SHELF_ONE_BOOKS: [Book; 6] = [
    Book { drift_divisor: 2.0, y: 5.5, z: 0.0 },
    Book { drift_divisor: 0.0, y: 5.5, z: 0.1 },
    Book { drift_divisor: 3.0, y: 9.5, z: 0.1 },
    Book { drift_divisor: 0.0, y: 17.5, z: 0.1 },
    Book { drift_divisor: 0.0, y: 17.5, z: 0.2 },
    Book { drift_divisor: 4.0, y: 13.5, z: -0.2 },
];

const SHELF_TWO_BOOKS: [Book; 6] = [
    Book { drift_divisor: 0.0, y: 5.5, z: 0.0 },
    Book { drift_divisor: 6.0, y: 5.5, z: 0.1 },
    Book { drift_divisor: 0.0, y: 9.5, z: 0.1 },
    Book { drift_divisor: 0.0, y: 13.5, z: -0.3 },
    Book { drift_divisor: 4.0, y: 13.5, z: -0.4 },
    Book { drift_divisor: 2.0, y: 13.5, z: -0.2 },
];

fn bookshelf(stack: &mut TransformStack, list: &mut DrawList, z: f32, drift: f32, books: &[Book]) {
    stack.scoped(|s| {
        // base
        s.translate(4.75, -1.95, z);
        s.scale(0.4, 0.1, 1.25);
        list.draw_cube(s, Finish::BlackWood);

        // side panels
        for panel_z in [0.48, -0.48] {
            s.scoped(|s| {
                s.translate(0.0, 9.5, panel_z);
                s.scale(1.0, 20.0, 0.06);
                list.draw_cube(s, Finish::BlackWood);
            });
        }

        // top panel, same footprint as the base
        s.scoped(|s| {
            s.translate(0.0, 19.0, 0.0);
            list.draw_cube(s, Finish::BlackWood);
        });

        // back panel
        s.scoped(|s| {
            s.translate(0.5, 10.0, 0.0);
            s.scale(0.06, 19.0, 1.0);
            list.draw_cube(s, Finish::BlackWood);
        });

        // shelves
        for y in [15.5, 11.5, 7.5, 3.5] {
            s.scoped(|s| {
                s.translate(0.0, y, 0.0);
                list.draw_cube(s, Finish::BlackWood);
            });
        }

        for book in books {
            let dx = if book.drift_divisor != 0.0 {
                drift / book.drift_divisor
            } else {
                0.0
            };
            s.scoped(|s| {
                s.translate(-0.25 - dx, book.y, book.z);
                s.scale(0.5, 2.7, 0.05);
                list.draw_cube(s, Finish::WhiteLacquer);
            });
        }
    });
}

pub(crate) fn bookshelves(stack: &mut TransformStack, list: &mut DrawList, drift: f32) {
    bookshelf(stack, list, 2.5, drift, &SHELF_ONE_BOOKS);
    bookshelf(stack, list, 1.0, drift, &SHELF_TWO_BOOKS);
}

pub(crate) fn desk(stack: &mut TransformStack, list: &mut DrawList, laptop_closed: bool) {
    stack.scoped(|s| {
        s.translate(2.55, -1.1, 4.0);
        s.scale(2.65, 0.1, 1.0);
        list.draw_cube(s, Finish::LightWood);

        for z in [-0.4, 0.4] {
            s.scoped(|s| {
                s.translate(0.4, -4.0, z);
                s.scale(0.05, 9.0, 0.1);
                list.draw_cube(s, Finish::LightWood);
            });
        }

        // laptop
        s.scoped(|s| {
            s.translate(0.2, 0.5, -0.1);
            s.scale(0.3, 0.11, 0.4);
            list.draw_cube(s, Finish::Silver);
        });

        if laptop_closed {
            s.scoped(|s| {
                s.translate(0.2, 1.0, -0.1);
                s.scale(0.3, 0.11, 0.4);
                list.draw_cube(s, Finish::Silver);
            });
        } else {
            s.scoped(|s| {
                s.translate(0.2, 2.0, 0.1);
                s.scale(0.3, 6.0, 0.05);
                list.draw_cube(s, Finish::Silver);
            });
            s.scoped(|s| {
                s.translate(0.2, 2.0, 0.05);
                s.scale(0.25, 5.5, 0.01);
                list.draw_cube(s, Finish::CodeScreen);
            });
        }

        s.scoped(|s| {
            s.translate(0.2, 0.55, -0.1);
            s.scale(0.2, 0.11, 0.2);
            list.draw_cube(s, Finish::BlackWood);
        });

        // under-desk cabinet
        for x in [-0.48, -0.18] {
            s.scoped(|s| {
                s.translate(x, -4.0, 0.0);
                s.scale(0.03, 8.5, 1.0);
                list.draw_cube(s, Finish::LightWood);
            });
        }
        s.scoped(|s| {
            s.translate(-0.33, -8.0, 0.0);
            s.scale(0.3, 0.1, 1.0);
            list.draw_cube(s, Finish::LightWood);
        });
        for y in [-5.45, -3.05] {
            s.scoped(|s| {
                s.translate(-0.33, y, 0.0);
                s.scale(0.3, 0.15, 1.0);
                list.draw_cube(s, Finish::LightWood);
            });
        }
    });
}

pub(crate) fn office_chair(stack: &mut TransformStack, list: &mut DrawList, slid_back: bool) {
    let z = if slid_back { 2.5 } else { 3.0 };
    stack.scoped(|s| {
        s.translate(3.1, -1.35, z);
        s.rotate_y(250.0);
        s.scale(0.7, 0.11, 0.7);
        list.draw_cube(s, Finish::BlueLeather);

        s.scoped(|s| {
            s.translate(-0.45, 3.0, 0.0);
            s.scale(0.11, 6.0, 1.0);
            list.draw_cube(s, Finish::BlueLeather);
        });

        // pedestal and cross feet
        s.scoped(|s| {
            s.translate(0.0, -2.5, 0.0);
            s.scale(0.12, 4.0, 0.12);
            list.draw_cube(s, Finish::BlackWood);
        });
        s.scoped(|s| {
            s.translate(0.0, -4.25, 0.0);
            s.scale(0.95, 0.5, 0.12);
            list.draw_cube(s, Finish::BlackWood);
        });
        s.scoped(|s| {
            s.translate(0.0, -4.25, 0.0);
            s.scale(0.12, 0.5, 0.95);
            list.draw_cube(s, Finish::BlackWood);
        });

        // arms
        for z in [-0.4, 0.4] {
            s.scoped(|s| {
                s.translate(-0.1, 2.5, z);
                s.scale(0.7, 0.5, 0.12);
                list.draw_cube(s, Finish::BlackWood);
            });
            s.scoped(|s| {
                s.translate(0.2, 1.5, z);
                s.scale(0.1, 2.5, 0.12);
                list.draw_cube(s, Finish::BlackWood);
            });
        }
    });
}

fn refrigerator(stack: &mut TransformStack, list: &mut DrawList, door_open: bool) {
    stack.scoped(|s| {
        s.translate(-1.3, -1.9, 4.0);
        s.scale(1.25, 0.05, 1.0);
        list.draw_cube(s, Finish::Silver);

        s.scoped(|s| {
            s.translate(0.0, 40.0, 0.0);
            list.draw_cube(s, Finish::Silver);
        });

        s.scoped(|s| {
            s.translate(0.0, 19.0, 0.5);
            s.scale(1.0, 41.0, 0.05);
            list.draw_cube(s, Finish::Silver);
        });

        for x in [0.5, -0.5] {
            s.scoped(|s| {
                s.translate(x, 19.0, 0.0);
                s.scale(0.05, 41.0, 1.0);
                list.draw_cube(s, Finish::Silver);
            });
        }

        // door, hinged on the left panel; the handle rides on the door
        if door_open {
            s.scoped(|s| {
                s.translate(0.1, 19.0, -0.85);
                s.rotate_y(-45.0);
                s.scale(1.0, 41.0, 0.05);
                list.draw_cube(s, Finish::Silver);

                s.scoped(|s| {
                    s.translate(-0.4, 0.0, -0.5);
                    s.scale(0.05, 0.4, 0.05);
                    list.draw_cube(s, Finish::BlackWood);
                });
            });
        } else {
            s.scoped(|s| {
                s.translate(0.0, 19.0, -0.5);
                s.scale(1.0, 41.0, 0.05);
                list.draw_cube(s, Finish::Silver);

                s.scoped(|s| {
                    s.translate(-0.4, 0.0, -0.5);
                    s.scale(0.05, 0.4, 0.05);
                    list.draw_cube(s, Finish::BlackWood);
                });
            });
        }
    });
}

fn bar_stool(stack: &mut TransformStack, list: &mut DrawList, x: f32, z: f32, swivel: f32) {
    stack.scoped(|s| {
        s.translate(x, -1.0, z);
        if swivel != 0.0 {
            s.rotate_y(swivel);
        }
        s.scale(0.5, 0.11, 0.5);
        list.draw_cube(s, Finish::NavyFabric);

        for (leg_x, leg_z) in [(0.45, -0.45), (-0.45, 0.45), (-0.45, -0.45), (0.45, 0.45)] {
            s.scoped(|s| {
                s.translate(leg_x, -3.5, leg_z);
                s.scale(0.12, 8.0, 0.12);
                list.draw_cube(s, Finish::BlackWood);
            });
        }
    });
}

pub(crate) fn kitchen(stack: &mut TransformStack, list: &mut DrawList, toggles: &ToggleState) {
    // tile flooring
    stack.scoped(|s| {
        s.translate(-2.85, -1.9, 2.6);
        s.scale(4.3, 0.01, 3.75);
        list.draw_cube(s, Finish::FloorTile);
    });

    refrigerator(stack, list, toggles.fridge_open);

    // countertop with stove
    stack.scoped(|s| {
        s.translate(-3.5, -0.9, 4.0);
        s.scale(3.05, 0.05, 1.0);
        list.draw_cube(s, Finish::Marble);

        s.scoped(|s| {
            s.translate(0.1, 1.0, 0.0);
            s.scale(0.4, 0.5, 0.8);
            list.draw_cube(s, Finish::WhiteLacquer);
        });

        // gas burners
        for (x, z) in [(0.2, 0.15), (0.2, -0.15), (0.0, 0.15), (0.0, -0.15)] {
            s.scoped(|s| {
                s.translate(x, 1.1, z);
                s.scale(0.1, 1.0, 0.2);
                list.draw_cube(s, Finish::BlackWood);
            });
        }
    });

    // sink counter
    stack.scoped(|s| {
        s.translate(-4.52, -0.9, 2.25);
        s.scale(1.0, 0.05, 2.75);
        list.draw_cube(s, Finish::Marble);

        s.scoped(|s| {
            s.translate(0.1, 1.0, 0.2);
            s.scale(0.4, 0.5, 0.3);
            list.draw_cube(s, Finish::Silver);
        });

        // faucet: riser and two spouts
        s.scoped(|s| {
            s.translate(0.0, 1.1, 0.2);
            s.scale(0.08, 9.0, 0.02);
            list.draw_cube(s, Finish::BlackWood);
        });
        for z in [0.15, 0.25] {
            s.scoped(|s| {
                s.translate(0.0, 1.1, z);
                s.scale(0.08, 3.0, 0.02);
                list.draw_cube(s, Finish::BlackWood);
            });
        }
    });

    // cabinets under both counters
    stack.scoped(|s| {
        s.translate(-3.5, -1.5, 4.0);
        s.scale(3.05, 1.0, 1.0);
        list.draw_cube(s, Finish::BlackWood);
    });
    stack.scoped(|s| {
        s.translate(-4.52, -1.5, 2.25);
        s.scale(1.0, 1.0, 2.75);
        list.draw_cube(s, Finish::BlackWood);
    });

    // bar stand
    stack.scoped(|s| {
        s.translate(-3.5, -0.8, 1.3);
        s.scale(3.5, 0.05, 0.8);
        list.draw_cube(s, Finish::LightWood);

        s.scoped(|s| {
            s.translate(0.45, -11.0, 0.0);
            s.scale(0.02, 22.0, 0.3);
            list.draw_cube(s, Finish::LightWood);
        });
    });

    // bar stools slide out from under the stand; the second also swivels
    if toggles.bar_stool_out {
        bar_stool(stack, list, -2.4, 0.0, 0.0);
        bar_stool(stack, list, -3.3, 0.2, 45.0);
    } else {
        bar_stool(stack, list, -2.4, 0.4, 0.0);
        bar_stool(stack, list, -3.3, 0.4, 0.0);
    }
}
