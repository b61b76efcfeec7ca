//! Built-in tables and dump defaults.
//!
//! These reproduce the drawing application's `colors` refactor and its
//! magic-number cleanup. A table file passed with `--table` replaces them.

pub const DEFAULT_SIGNATURE_TARGET: &str = "renderer.js";

/// Exported renderer functions take a destructured state that includes
/// `colors`; internal helpers gain a trailing `colors` parameter.
pub const SIGNATURE_REPLACEMENTS: &[(&str, &str)] = &[
    (
        "export function drawGrid(ctx, state, dataToScreen, screenToData, lastGridState, lastAngularGridState)",
        "export function drawGrid(ctx, { gridDisplayMode, canvas, dpr, viewTransform, gridAlpha, colors }, dataToScreen, screenToData, lastGridState, lastAngularGridState)",
    ),
    (
        "export function drawAxes(ctx, htmlOverlay, state, dataToScreen, screenToData, lastGridState, lastAngularGridState, updateHtmlLabel)",
        "export function drawAxes(ctx, htmlOverlay, { canvas, dpr, coordsDisplayMode, viewTransform, angleDisplayMode, colors }, dataToScreen, screenToData, lastGridState, lastAngularGridState, updateHtmlLabel)",
    ),
    (
        "export function drawPoint(ctx, point, state, dataToScreen)",
        "export function drawPoint(ctx, point, { selectedPointIds, selectedCenterIds, activeCenterId, currentColor, colors }, dataToScreen)",
    ),
    (
        "export function drawAllEdges(ctx, state, dataToScreen, findPointById, getEdgeId)",
        "export function drawAllEdges(ctx, { allEdges, selectedEdgeIds, isDragConfirmed, dragPreviewPoints, currentColor, colors }, dataToScreen, findPointById, getEdgeId)",
    ),
    (
        "export function drawDragFeedback(ctx, htmlOverlay, targetPointId, currentPointStates, state, dataToScreen, findNeighbors, getEdgeId, isSnapping = false, excludedEdgeId = null, updateHtmlLabel = null)",
        "export function drawDragFeedback(ctx, htmlOverlay, targetPointId, currentPointStates, { lastGridState, showDistances, showAngles, distanceSigFigs, angleDisplayMode, angleSigFigs, currentShiftPressed, viewTransform, colors }, dataToScreen, findNeighbors, getEdgeId, isSnapping = false, excludedEdgeId = null, updateHtmlLabel = null)",
    ),
    (
        "export function drawTransformIndicators(ctx, htmlOverlay, state, dataToScreen, updateHtmlLabel)",
        "export function drawTransformIndicators(ctx, htmlOverlay, { transformIndicatorData, angleSigFigs, distanceSigFigs, colors }, dataToScreen, updateHtmlLabel)",
    ),
    (
        "export function drawReferenceElementsGeometry(ctx, context, dataToScreen, screenToData, state)",
        "export function drawReferenceElementsGeometry(ctx, context, dataToScreen, screenToData, { showAngles, showDistances, viewTransform, mousePos, colors })",
    ),
    (
        "export function prepareSnapInfoTexts(ctx, htmlOverlay, startPointData, targetDataPos, snappedOutput, state, dataToScreen, drawingContext, updateHtmlLabel)",
        "export function prepareSnapInfoTexts(ctx, htmlOverlay, startPointData, targetDataPos, snappedOutput, { showDistances, showAngles, currentShiftPressed, distanceSigFigs, angleSigFigs, angleDisplayMode, viewTransform, frozenReference_D_du, gridDisplayMode, frozenReference_A_rad, colors }, dataToScreen, drawingContext, updateHtmlLabel)",
    ),
    (
        "export function prepareReferenceElementsTexts(htmlOverlay, context, state, screenToData, dataToScreen, updateHtmlLabel)",
        "export function prepareReferenceElementsTexts(htmlOverlay, context, { showAngles, showDistances, viewTransform, mousePos, frozenReference_D_du, distanceSigFigs, angleDisplayMode, colors }, screenToData, dataToScreen, updateHtmlLabel)",
    ),
    (
        "export function updateMouseCoordinates(htmlOverlay, state, screenToData, updateHtmlLabel)",
        "export function updateMouseCoordinates(htmlOverlay, { coordsDisplayMode, isMouseOverCanvas, currentShiftPressed, ghostPointPosition, gridDisplayMode, lastGridState, angleDisplayMode, canvas, dpr, mousePos, colors}, screenToData, updateHtmlLabel)",
    ),
    (
        "export function drawDisplayIcon(ctx, icon, state, htmlOverlay, updateHtmlLabel)",
        "export function drawDisplayIcon(ctx, icon, { coordsDisplayMode, gridDisplayMode, angleDisplayMode, distanceDisplayMode, colors }, htmlOverlay, updateHtmlLabel)",
    ),
    (
        "export function drawCanvasUI(ctx, htmlOverlay, state, updateHtmlLabel)",
        "export function drawCanvasUI(ctx, htmlOverlay, { dpr, canvasUI, isToolbarExpanded, isColorPaletteExpanded, isTransformPanelExpanded, isDisplayPanelExpanded, isPlacingTransform, placingTransformType, placingSnapPos, mousePos, selectedSwatchIndex, recentColors, activeThemeName, colors }, updateHtmlLabel)",
    ),
    // helpers
    (
        "function drawZeroTickAndTickLabel(ctx, origin, canvasWidth, canvasHeight, coordsDisplayMode, updateHtmlLabel)",
        "function drawZeroTickAndTickLabel(ctx, origin, canvasWidth, canvasHeight, coordsDisplayMode, updateHtmlLabel, colors)",
    ),
    (
        "function drawCenterSymbol(ctx, point, dataToScreen)",
        "function drawCenterSymbol(ctx, point, dataToScreen, colors)",
    ),
    (
        "function drawUITransformSymbol(ctx, icon)",
        "function drawUITransformSymbol(ctx, icon, colors)",
    ),
    (
        "function drawCoordsIcon(ctx, rect, mode, isSelected, htmlOverlay, updateHtmlLabel)",
        "function drawCoordsIcon(ctx, rect, mode, isSelected, htmlOverlay, updateHtmlLabel, colors)",
    ),
    (
        "function drawAngleIcon(ctx, rect, mode, isSelected, htmlOverlay, updateHtmlLabel)",
        "function drawAngleIcon(ctx, rect, mode, isSelected, htmlOverlay, updateHtmlLabel, colors)",
    ),
    (
        "function drawDistanceIcon(ctx, rect, mode, isSelected, htmlOverlay, updateHtmlLabel)",
        "function drawDistanceIcon(ctx, rect, mode, isSelected, htmlOverlay, updateHtmlLabel, colors)",
    ),
    (
        "function drawGridIcon(ctx, rect, mode, isSelected)",
        "function drawGridIcon(ctx, rect, mode, isSelected, colors)",
    ),
];

/// Call sites include the trailing `;` so a signature line never matches.
pub const CALL_SITE_REPLACEMENTS: &[(&str, &str)] = &[
    (
        "drawZeroTickAndTickLabel(ctx, origin, canvasWidth, canvasHeight, coordsDisplayMode, updateHtmlLabel);",
        "drawZeroTickAndTickLabel(ctx, origin, canvasWidth, canvasHeight, coordsDisplayMode, updateHtmlLabel, colors);",
    ),
    (
        "drawCenterSymbol(ctx, point, dataToScreen);",
        "drawCenterSymbol(ctx, point, dataToScreen, colors);",
    ),
    (
        "drawUITransformSymbol(ctx, ghostIcon);",
        "drawUITransformSymbol(ctx, ghostIcon, colors);",
    ),
    (
        "drawUITransformSymbol(ctx, icon);",
        "drawUITransformSymbol(ctx, icon, colors);",
    ),
    (
        "drawCoordsIcon(ctx, rect, coordsDisplayMode, isSelected, htmlOverlay, updateHtmlLabel);",
        "drawCoordsIcon(ctx, rect, coordsDisplayMode, isSelected, htmlOverlay, updateHtmlLabel, colors);",
    ),
    (
        "drawGridIcon(ctx, rect, gridDisplayMode, isSelected);",
        "drawGridIcon(ctx, rect, gridDisplayMode, isSelected, colors);",
    ),
    (
        "drawAngleIcon(ctx, rect, angleDisplayMode, isSelected, htmlOverlay, updateHtmlLabel);",
        "drawAngleIcon(ctx, rect, angleDisplayMode, isSelected, htmlOverlay, updateHtmlLabel, colors);",
    ),
    (
        "drawDistanceIcon(ctx, rect, distanceDisplayMode, isSelected, htmlOverlay, updateHtmlLabel);",
        "drawDistanceIcon(ctx, rect, distanceDisplayMode, isSelected, htmlOverlay, updateHtmlLabel, colors);",
    ),
];

/// Files that must exist in the working directory before literals are rewritten.
pub const LITERAL_SENTINELS: &[&str] = &["script.js", "constants.js"];

/// `(file, find, replace)`; both sides are literal text.
pub const LITERAL_REPLACEMENTS: &[(&str, &str, &str)] = &[
    ("renderer.js", "ctx.globalAlpha = 0.25;", "ctx.globalAlpha = C.FACE_GLOW_ALPHA;"),
    (
        "renderer.js",
        "if (tickAlpha < 0.01) return;",
        "if (tickAlpha < C.POLAR_REF_TICK_ALPHA_THRESHOLD) return;",
    ),
    (
        "renderer.js",
        "const finalColor = `rgba(${colors.feedbackDefault.join(',')}, ${tickAlpha * 0.95})`;",
        "const finalColor = `rgba(${colors.feedbackDefault.join(',')}, ${tickAlpha * C.POLAR_REF_TICK_LABEL_ALPHA_FACTOR})`;",
    ),
    (
        "renderer.js",
        "const labelMargin = 100;",
        "const labelMargin = C.POLAR_REF_LABEL_MARGIN;",
    ),
    ("renderer.js", "ctx.lineWidth = 1.5;", "ctx.lineWidth = C.POLAR_REF_LINE_WIDTH;"),
    (
        "renderer.js",
        "ctx.lineWidth = C.GRID_LINEWIDTH * 0.5;",
        "ctx.lineWidth = C.GRID_LINEWIDTH * C.POLAR_GRID_SPOKE_WIDTH_FACTOR;",
    ),
    (
        "renderer.js",
        r"const angleText = `${parseFloat(angleDeg.toFixed(4)).toString()}^{\circ}`;",
        r"const angleText = `${parseFloat(angleDeg.toFixed(C.TRANSFORM_INDICATOR_PRECISION)).toString()}^{\circ}`;",
    ),
    (
        "renderer.js",
        "if (Math.abs(effectiveScale - 1) < 0.001) {",
        "if (Math.abs(effectiveScale - 1) < C.TRANSFORM_INDICATOR_SCALE_SNAP_TOLERANCE) {",
    ),
    (
        "renderer.js",
        "const formattedScale = parseFloat(effectiveScale.toFixed(4)).toString();",
        "const formattedScale = parseFloat(effectiveScale.toFixed(C.TRANSFORM_INDICATOR_PRECISION)).toString();",
    ),
    ("renderer.js", "'rgba(128, 128, 128, 1)'", "C.UI_COLOR_TARGET_UNASSIGNED"),
    (
        "renderer.js",
        "ctx.fillStyle = '#808080';",
        "ctx.fillStyle = C.UI_ICON_DISABLED_FILL;",
    ),
    (
        "renderer.js",
        "ctx.arc(centerScreen.x, centerScreen.y, 4, 0, 2 * Math.PI);",
        "ctx.arc(centerScreen.x, centerScreen.y, C.FACE_COORD_SYSTEM_ORIGIN_RADIUS, 0, 2 * Math.PI);",
    ),
    // stroke of the disabled icon's strike-through line
    (
        "renderer.js",
        "ctx.strokeStyle = '#ff0000';",
        "ctx.strokeStyle = colors.uiIconDisabled;",
    ),
    (
        "renderer.js",
        "const checkerboardColor1 = '#808080';",
        "const checkerboardColor1 = colors.checkerboardColor1;",
    ),
    (
        "renderer.js",
        "const checkerboardColor2 = '#c0c0c0';",
        "const checkerboardColor2 = colors.checkerboardColor2;",
    ),
    (
        "renderer.js",
        "const xArrowColor = coordSystemSnapScale !== null ? colors.feedbackSnapped : '#ff0000';",
        "const xArrowColor = coordSystemSnapScale !== null ? colors.feedbackSnapped : colors.coordSysX;",
    ),
    (
        "renderer.js",
        "const yArrowColor = coordSystemSnapScale !== null ? colors.feedbackSnapped : '#00ff00';",
        "const yArrowColor = coordSystemSnapScale !== null ? colors.feedbackSnapped : colors.coordSysY;",
    ),
    (
        "renderer.js",
        "drawArrow(centerScreen, xAxisScreenEnd, '#ff0000', xArrowColor);",
        "drawArrow(centerScreen, xAxisScreenEnd, xColor, xColor);",
    ),
    (
        "renderer.js",
        "drawArrow(centerScreen, yAxisScreenEnd, '#00ff00', yArrowColor);",
        "drawArrow(centerScreen, yAxisScreenEnd, yColor, yColor);",
    ),
    (
        "renderer.js",
        "ctx.fillStyle = '#0000ff';",
        "ctx.fillStyle = colors.coordSysOrigin;",
    ),
    (
        "script.js",
        "if (bestSnap.priority < 0.1) {",
        "if (bestSnap.priority < C.TRANSFORM_SCALE_SNAP_PRIORITY_THRESHOLD) {",
    ),
    (
        "utils.js",
        "const centerSelectRadius = 8;",
        "const centerSelectRadius = C.COORD_SYSTEM_ELEMENT_SELECT_RADIUS;",
    ),
    (
        "utils.js",
        "const armSelectThreshold = 5;",
        "const armSelectThreshold = C.COORD_SYSTEM_AXIS_SELECT_THRESHOLD;",
    ),
    (
        "utils.js",
        "const snapThreshold = Math.PI / 24; // About 7.5 degrees",
        "const snapThreshold = C.COORD_SYSTEM_AXIS_SNAP_THRESHOLD_RAD;",
    ),
    (
        "utils.js",
        "const pixelSnapThreshold = 15 / viewTransform.scale;",
        "const pixelSnapThreshold = C.COORD_SYSTEM_AXIS_SCALE_SNAP_THRESHOLD_PIXELS / viewTransform.scale;",
    ),
    (
        "utils.js",
        "const fractions = [0, 0.25, 1/3, 0.5, 2/3, 0.75, 1];",
        "const fractions = C.COORD_SYSTEM_CENTER_EDGE_SNAP_FRACTIONS;",
    ),
];

pub const DEFAULT_DUMP_ROOT: &str = "./";
pub const DEFAULT_DUMP_OUTPUT: &str = "project_content.txt";

pub const DUMP_EXTENSIONS: &[&str] = &[
    ".py", ".html", ".js", ".css", ".json", ".md", ".txt", ".toml", ".mbar", ".ico", ".ps1",
];

pub const DUMP_EXCLUDE_DIRS: &[&str] = &[
    ".git",
    "__pycache__",
    ".pytest_cache",
    "dist",
    "tests",
    "logs",
    "node_modules",
    "target",
];

pub const DUMP_EXCLUDE_FILES: &[&str] = &[
    "package-lock.json",
    "yarn.lock",
    "pnpm-lock.yaml",
    "Cargo.lock",
    "poetry.lock",
];

pub const DUMP_EXCLUDE_SUBSTRINGS: &[&str] = &[".lock", "-lock.", ".min."];

pub const DUMP_SUPPRESS_CONTENT: &[&str] = &[
    "project_content.txt",
    "write_content_to_file.py",
    "session.json",
    "cm_logo.ico",
];

pub const CONTENT_EXCLUDED_MARKER: &str = "--- CONTENT EXCLUDED (listed in exclude_files) ---\n";
pub const LATIN1_WARNING_MARKER: &str = "\n--- (Warning: Read using latin-1 encoding) ---\n";

pub const TREE_BRANCH: &str = "├── ";
pub const TREE_PIPE: &str = "│   ";

/// Appended verbatim after the last file body.
pub const DUMP_INSTRUCTIONS: &str = "\
=== Instructions ===

The sections above contain the directory structure and the full text of every
relevant file in this project. Files marked CONTENT EXCLUDED were listed for
context only.

When you answer:
1. Base every statement about the code on the file contents above. If something
   you need is not included, say which file you would need to see.
2. When proposing a change, name the file and show the complete updated
   function or block, not a fragment with ellipses.
3. Keep existing names, formatting and module boundaries unless the change
   requires otherwise, and say so when it does.
4. Point out any other place in the project that must change together with
   your edit (callers, imports, constants).
5. Keep explanations short; lead with the code.
";
