mod event;
mod state;

pub use event::{Button, EditOutcome, PointerEvent};
pub use state::{DragState, EditorState};

use tracing::{debug, warn};

use crate::config::GridConfig;
use crate::error::{ConfigError, Result, TopologyError};
use crate::math::distance_2d::in_square_2d;
use crate::raster::{FillGrid, Rasterize};
use crate::topology::{Edge, EdgeIndex, Polygon, Removal};

/// Turns pointer input into polygon edits and keeps the fill grid current.
///
/// The editor owns the polygon and its fill grid. Interaction state lives
/// in an [`EditorState`] held by the caller. Every geometry change is
/// followed by a full re-rasterization before control returns.
#[derive(Debug, Clone)]
pub struct Editor {
    config: GridConfig,
    polygon: Polygon,
    grid: FillGrid,
    raster: Rasterize,
}

impl Editor {
    /// Creates an editor holding the seed triangle.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` is invalid or the grid is too small to
    /// hold the seed triangle.
    pub fn new(config: GridConfig) -> Result<Self> {
        config.validate()?;
        let polygon = Polygon::seed(config.edge_capacity)?;
        Self::with_polygon(config, polygon)
    }

    /// Creates an editor around an existing polygon.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` is invalid, if the polygon's capacity
    /// differs from `config.edge_capacity`, or if any vertex lies outside
    /// `[0, rows) × [0, cols)`.
    pub fn with_polygon(config: GridConfig, polygon: Polygon) -> Result<Self> {
        config.validate()?;
        if polygon.capacity() != config.edge_capacity {
            return Err(ConfigError::CapacityMismatch {
                configured: config.edge_capacity,
                polygon: polygon.capacity(),
            }
            .into());
        }
        if let Some((vertex, edge)) = polygon
            .edges()
            .iter()
            .enumerate()
            .find(|(_, edge)| !config.contains(&edge.start()))
        {
            return Err(TopologyError::OutOfBounds {
                vertex,
                x: edge.start().x,
                y: edge.start().y,
                rows: config.rows(),
                cols: config.cols(),
            }
            .into());
        }
        let raster = Rasterize::new(config.rows(), config.cols())
            .with_determinant_test(config.determinant_test);
        let grid = raster.execute(&polygon);
        debug!(
            rows = config.rows(),
            cols = config.cols(),
            vertices = polygon.len(),
            "editor ready"
        );
        Ok(Self {
            config,
            polygon,
            grid,
            raster,
        })
    }

    /// The grid configuration.
    #[must_use]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// The edited polygon.
    #[must_use]
    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    /// Current fill state of every cell.
    #[must_use]
    pub fn fill_grid(&self) -> &FillGrid {
        &self.grid
    }

    /// Edges to draw, in storage order and grid units.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        self.polygon.edges()
    }

    /// Pixel position at which `vertex` is drawn.
    #[must_use]
    pub fn vertex_pixel_position(&self, vertex: EdgeIndex) -> Option<(f64, f64)> {
        self.polygon
            .edge(vertex)
            .map(|edge| self.config.grid_to_pixel(&edge.start()))
    }

    /// Returns the first vertex, in storage order, whose grab box contains
    /// the pixel `(x, y)`.
    #[must_use]
    pub fn hit_test(&self, x: f64, y: f64) -> Option<EdgeIndex> {
        self.polygon.edges().iter().position(|edge| {
            let (cx, cy) = self.config.grid_to_pixel(&edge.start());
            in_square_2d(x, y, cx, cy, self.config.grab_radius)
        })
    }

    /// Applies one pointer event.
    ///
    /// Left button grabs, drags and releases vertices. Right button deletes
    /// the vertex under the pointer, or inserts a vertex there if none is hit.
    pub fn handle(&mut self, state: &mut EditorState, event: PointerEvent) -> EditOutcome {
        match event {
            PointerEvent::ButtonDown {
                button: Button::Left,
                x,
                y,
            } => match self.hit_test(x, y) {
                Some(vertex) => {
                    state.drag = DragState::Dragging(vertex);
                    EditOutcome::DragStarted(vertex)
                }
                None => EditOutcome::Unchanged,
            },
            PointerEvent::ButtonUp {
                button: Button::Left,
                ..
            } => match state.drag {
                DragState::Dragging(_) => {
                    state.drag = DragState::Idle;
                    EditOutcome::DragEnded
                }
                DragState::Idle => EditOutcome::Unchanged,
            },
            PointerEvent::Move { x, y } => match state.drag {
                DragState::Dragging(vertex) => {
                    if self.drag(vertex, x, y) {
                        EditOutcome::Moved(vertex)
                    } else {
                        EditOutcome::Unchanged
                    }
                }
                DragState::Idle => EditOutcome::Unchanged,
            },
            PointerEvent::ButtonDown {
                button: Button::Right,
                x,
                y,
            } => {
                if let Some(vertex) = self.hit_test(x, y) {
                    match self.delete_vertex(vertex) {
                        Some(removal) => {
                            state.apply_removal(&removal);
                            EditOutcome::Deleted(removal)
                        }
                        None => EditOutcome::Unchanged,
                    }
                } else {
                    self.insert_at(x, y)
                        .map_or(EditOutcome::Unchanged, EditOutcome::Inserted)
                }
            }
            PointerEvent::ButtonDown { .. } | PointerEvent::ButtonUp { .. } => {
                EditOutcome::Unchanged
            }
        }
    }

    /// Moves `vertex` to the cell under the pixel `(x, y)`.
    ///
    /// Returns `true` if the vertex changed cell. Targets outside the grid
    /// are rejected and leave the polygon untouched.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is not a live slot.
    pub fn drag(&mut self, vertex: EdgeIndex, x: f64, y: f64) -> bool {
        let target = self.config.pixel_to_grid(x, y);
        let unchanged = self
            .polygon
            .edge(vertex)
            .is_some_and(|edge| edge.start() == target);
        if unchanged {
            return false;
        }
        let was_clockwise = self.polygon.is_clockwise();
        if !self
            .polygon
            .move_vertex(vertex, target, self.config.rows(), self.config.cols())
        {
            return false;
        }
        self.refresh(was_clockwise);
        true
    }

    /// Inserts a vertex at the cell under the pixel `(x, y)`.
    ///
    /// Returns `None` if the pixel is off the grid, the polygon is full, or
    /// the cell already holds a vertex.
    pub fn insert_at(&mut self, x: f64, y: f64) -> Option<EdgeIndex> {
        let point = self.config.pixel_to_grid(x, y);
        if !self.config.contains(&point) {
            debug!(x, y, "insert ignored: pointer off grid");
            return None;
        }
        let was_clockwise = self.polygon.is_clockwise();
        let slot = self.polygon.insert(point)?;
        self.refresh(was_clockwise);
        Some(slot)
    }

    /// Deletes `vertex` unless the polygon is a triangle.
    ///
    /// Any vertex index the caller cached may be stale afterwards; see
    /// [`Removal`].
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is not a live slot.
    pub fn delete_vertex(&mut self, vertex: EdgeIndex) -> Option<Removal> {
        let was_clockwise = self.polygon.is_clockwise();
        let removal = self.polygon.delete(vertex)?;
        self.refresh(was_clockwise);
        Some(removal)
    }

    fn refresh(&mut self, was_clockwise: bool) {
        if was_clockwise && !self.polygon.is_clockwise() {
            warn!("edit reversed the polygon's winding; later inserts may misbehave");
        }
        self.raster.execute_into(&self.polygon, &mut self.grid);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::{DeterminantTest, Point2};

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    fn editor() -> Editor {
        init_tracing();
        Editor::new(GridConfig::default()).unwrap()
    }

    fn square_editor() -> Editor {
        init_tracing();
        let points = [
            Point2::new(2.0, 2.0),
            Point2::new(6.0, 2.0),
            Point2::new(6.0, 6.0),
            Point2::new(2.0, 6.0),
        ];
        let polygon = Polygon::new(&points, 32).unwrap();
        Editor::with_polygon(GridConfig::default(), polygon).unwrap()
    }

    fn down(button: Button, x: f64, y: f64) -> PointerEvent {
        PointerEvent::ButtonDown { button, x, y }
    }

    fn up(button: Button, x: f64, y: f64) -> PointerEvent {
        PointerEvent::ButtonUp { button, x, y }
    }

    #[test]
    fn new_rasterizes_seed() {
        let editor = editor();
        assert_eq!(editor.polygon().len(), 3);
        assert!(editor.fill_grid().filled_count() > 0);
        assert_eq!(editor.fill_grid().rows(), 64);
        assert_eq!(editor.fill_grid().cols(), 36);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = GridConfig::default().with_edge_capacity(1);
        assert!(Editor::new(config).is_err());
    }

    #[test]
    fn polygon_capacity_must_match_config() {
        init_tracing();
        let polygon = Polygon::seed(32).unwrap();
        let config = GridConfig::default().with_edge_capacity(4);
        assert!(matches!(
            Editor::with_polygon(config, polygon),
            Err(crate::PolyrasterError::Config(ConfigError::CapacityMismatch {
                configured: 4,
                polygon: 32
            }))
        ));

        let mut editor = Editor::with_polygon(config, Polygon::seed(4).unwrap()).unwrap();
        let mut state = EditorState::new();
        assert_eq!(
            editor.handle(&mut state, down(Button::Right, 300.0, 210.0)),
            EditOutcome::Inserted(3)
        );
        assert_eq!(
            editor.handle(&mut state, down(Button::Right, 500.0, 330.0)),
            EditOutcome::Unchanged
        );
        assert_eq!(editor.polygon().len(), 4);
    }

    #[test]
    fn polygon_outside_grid_is_rejected() {
        init_tracing();
        let points = [
            Point2::new(2.0, 2.0),
            Point2::new(64.0, 2.0),
            Point2::new(6.0, 6.0),
        ];
        let polygon = Polygon::new(&points, 32).unwrap();
        assert!(matches!(
            Editor::with_polygon(GridConfig::default(), polygon),
            Err(crate::PolyrasterError::Topology(TopologyError::OutOfBounds {
                vertex: 1,
                rows: 64,
                cols: 36,
                ..
            }))
        ));

        // The seed triangle reaches (8, 8) and needs a 9x9 grid.
        let tiny = GridConfig::default().with_display(160, 160);
        assert!(Editor::new(tiny).is_err());
    }

    #[test]
    fn hit_test_uses_grab_box() {
        let editor = editor();
        assert_eq!(editor.vertex_pixel_position(0), Some((70.0, 70.0)));
        assert_eq!(editor.hit_test(77.0, 63.0), Some(0));
        assert_eq!(editor.hit_test(79.0, 70.0), None);
        assert_eq!(editor.hit_test(170.0, 170.0), Some(2));
    }

    #[test]
    fn drag_cycle_moves_vertex_and_refills() {
        let mut editor = editor();
        let mut state = EditorState::new();
        let before = editor.fill_grid().clone();

        assert_eq!(
            editor.handle(&mut state, down(Button::Left, 72.0, 68.0)),
            EditOutcome::DragStarted(0)
        );
        assert_eq!(state.dragged_vertex(), Some(0));

        let outcome = editor.handle(&mut state, PointerEvent::Move { x: 110.0, y: 130.0 });
        assert_eq!(outcome, EditOutcome::Moved(0));
        assert!(outcome.changed_geometry());
        assert_eq!(editor.edges()[0].start(), Point2::new(5.0, 6.0));
        assert_eq!(editor.edges()[2].end(), Point2::new(5.0, 6.0));
        assert_ne!(editor.fill_grid(), &before);

        assert_eq!(
            editor.handle(&mut state, up(Button::Left, 110.0, 130.0)),
            EditOutcome::DragEnded
        );
        assert_eq!(state.drag, DragState::Idle);
    }

    #[test]
    fn moves_while_idle_are_ignored() {
        let mut editor = editor();
        let mut state = EditorState::new();
        let before = editor.edges().to_vec();
        assert_eq!(
            editor.handle(&mut state, PointerEvent::Move { x: 400.0, y: 410.0 }),
            EditOutcome::Unchanged
        );
        assert_eq!(editor.edges(), before.as_slice());
    }

    #[test]
    fn drag_off_grid_is_rejected() {
        let mut editor = editor();
        let mut state = EditorState::new();
        editor.handle(&mut state, down(Button::Left, 170.0, 90.0));
        assert_eq!(state.dragged_vertex(), Some(1));
        let before = editor.edges().to_vec();
        let grid = editor.fill_grid().clone();
        for (x, y) in [(-10.0, 90.0), (1290.0, 90.0), (170.0, -5.0), (170.0, 730.0)] {
            assert_eq!(
                editor.handle(&mut state, PointerEvent::Move { x, y }),
                EditOutcome::Unchanged
            );
        }
        assert_eq!(editor.edges(), before.as_slice());
        assert_eq!(editor.fill_grid(), &grid);
        assert_eq!(state.dragged_vertex(), Some(1));
    }

    #[test]
    fn right_click_inserts_then_deletes() {
        let mut editor = editor();
        let mut state = EditorState::new();
        assert_eq!(
            editor.handle(&mut state, down(Button::Right, 300.0, 210.0)),
            EditOutcome::Inserted(3)
        );
        assert_eq!(editor.edges()[3].start(), Point2::new(15.0, 10.0));
        assert!(editor.polygon().validate().is_ok());

        let outcome = editor.handle(&mut state, down(Button::Right, 310.0, 210.0));
        assert!(matches!(outcome, EditOutcome::Deleted(_)));
        assert_eq!(editor.polygon().len(), 3);

        // A triangle cannot lose a vertex.
        assert_eq!(
            editor.handle(&mut state, down(Button::Right, 70.0, 70.0)),
            EditOutcome::Unchanged
        );
        assert_eq!(editor.polygon().len(), 3);
    }

    #[test]
    fn square_round_trip_restores_fill() {
        let mut editor = square_editor();
        let mut state = EditorState::new();
        let grid = editor.fill_grid().clone();
        assert_eq!(grid.filled_count(), 16);

        assert_eq!(
            editor.handle(&mut state, down(Button::Right, 90.0, 50.0)),
            EditOutcome::Inserted(4)
        );
        assert!(matches!(
            editor.handle(&mut state, down(Button::Right, 90.0, 50.0)),
            EditOutcome::Deleted(_)
        ));
        assert_eq!(editor.polygon().len(), 4);
        assert_eq!(editor.fill_grid(), &grid);
    }

    #[test]
    fn delete_during_drag_follows_relocated_vertex() {
        let mut editor = editor();
        let mut state = EditorState::new();
        editor.handle(&mut state, down(Button::Right, 300.0, 210.0));
        editor.handle(&mut state, down(Button::Left, 310.0, 210.0));
        assert_eq!(state.dragged_vertex(), Some(3));

        let outcome = editor.handle(&mut state, down(Button::Right, 70.0, 70.0));
        assert_eq!(
            outcome,
            EditOutcome::Deleted(Removal {
                slot: 0,
                relocated_from: Some(3)
            })
        );
        assert_eq!(state.dragged_vertex(), Some(0));
        assert_eq!(editor.edges()[0].start(), Point2::new(15.0, 10.0));

        editor.handle(&mut state, PointerEvent::Move { x: 330.0, y: 250.0 });
        assert_eq!(editor.edges()[0].start(), Point2::new(16.0, 12.0));
    }

    #[test]
    fn deleting_dragged_vertex_ends_drag() {
        let mut editor = editor();
        let mut state = EditorState::new();
        editor.handle(&mut state, down(Button::Right, 300.0, 210.0));
        editor.handle(&mut state, down(Button::Left, 70.0, 70.0));
        assert_eq!(state.dragged_vertex(), Some(0));
        editor.handle(&mut state, down(Button::Right, 70.0, 70.0));
        assert_eq!(state.drag, DragState::Idle);
    }

    #[test]
    fn inserts_stop_at_capacity() {
        init_tracing();
        let config = GridConfig::default().with_edge_capacity(4);
        let mut editor = Editor::new(config).unwrap();
        let mut state = EditorState::new();
        assert_eq!(
            editor.handle(&mut state, down(Button::Right, 300.0, 210.0)),
            EditOutcome::Inserted(3)
        );
        let before = editor.edges().to_vec();
        for x in [400.0, 500.0, 600.0] {
            assert_eq!(
                editor.handle(&mut state, down(Button::Right, x, 330.0)),
                EditOutcome::Unchanged
            );
        }
        assert_eq!(editor.edges(), before.as_slice());
    }

    #[test]
    fn other_buttons_do_nothing() {
        let mut editor = editor();
        let mut state = EditorState::new();
        for button in [Button::Middle, Button::Other(7)] {
            assert_eq!(
                editor.handle(&mut state, down(button, 70.0, 70.0)),
                EditOutcome::Unchanged
            );
        }
        assert_eq!(
            editor.handle(&mut state, up(Button::Left, 70.0, 70.0)),
            EditOutcome::Unchanged
        );
    }

    #[test]
    fn tolerance_config_reaches_rasterizer() {
        init_tracing();
        let config =
            GridConfig::default().with_determinant_test(DeterminantTest::Tolerance(1e-9));
        let tolerant = Editor::new(config).unwrap();
        let exact = editor();
        assert_eq!(tolerant.fill_grid(), exact.fill_grid());
    }
}
