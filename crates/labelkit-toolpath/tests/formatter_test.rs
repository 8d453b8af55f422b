use labelkit_core::{LabelGeometry, Offset, PathSegment, Positioning, Units};
use labelkit_toolpath::{format_instruction, format_program, ToolInstruction, ToolpathCompiler};

#[test]
fn test_directive_vocabulary() {
    assert_eq!(
        format_instruction(&ToolInstruction::SetUnits(Units::Mm)),
        "G21 ; Set units to mm"
    );
    assert_eq!(
        format_instruction(&ToolInstruction::SetUnits(Units::Inch)),
        "G20 ; Set units to inches"
    );
    assert_eq!(
        format_instruction(&ToolInstruction::SetPositioning(Positioning::Absolute)),
        "G90 ; Absolute positioning"
    );
    assert_eq!(
        format_instruction(&ToolInstruction::SetPositioning(Positioning::Relative)),
        "G91 ; Relative positioning"
    );
    assert_eq!(
        format_instruction(&ToolInstruction::ToolDown),
        "M3 S100 ; Pen down"
    );
    assert_eq!(format_instruction(&ToolInstruction::ToolUp), "M5 ; Pen up");
    assert_eq!(
        format_instruction(&ToolInstruction::ReturnHome),
        "G0 X0 Y0 ; Return to home"
    );
}

#[test]
fn test_coordinate_precision() {
    assert_eq!(
        format_instruction(&ToolInstruction::MoveTo { x: 10.0, y: 50.0 }),
        "G0 X10.000 Y50.000"
    );
    assert_eq!(
        format_instruction(&ToolInstruction::DrawTo { x: 2.3456789, y: -0.1 }),
        "G1 X2.346 Y-0.100"
    );
    assert_eq!(
        format_instruction(&ToolInstruction::DrawTo { x: 1.5, y: 0.0 }),
        "G1 X1.500 Y0.000"
    );
}

#[test]
fn test_one_line_per_instruction() {
    let program = [
        ToolInstruction::SetUnits(Units::Mm),
        ToolInstruction::SetPositioning(Positioning::Absolute),
        ToolInstruction::ReturnHome,
    ];
    let text = format_program(&program);
    assert_eq!(
        text,
        "G21 ; Set units to mm\nG90 ; Absolute positioning\nG0 X0 Y0 ; Return to home\n"
    );
    assert_eq!(text.lines().count(), program.len());
}

#[test]
fn test_empty_program_formats_to_nothing() {
    assert_eq!(format_program(&[]), "");
}

#[test]
fn test_full_program_text() {
    let compiler = ToolpathCompiler::new(Offset::new(10.0, 50.0)).unwrap();
    let geometry = LabelGeometry::from_segments(vec![PathSegment::from_coords(&[
        (0.0, 0.0),
        (10.0, 0.0),
    ])]);
    let program = compiler.compile(&geometry).unwrap();

    let expected = "\
G21 ; Set units to mm
G90 ; Absolute positioning
G0 X10.000 Y50.000
M3 S100 ; Pen down
G1 X20.000 Y50.000
M5 ; Pen up
G0 X0 Y0 ; Return to home
";
    assert_eq!(format_program(&program), expected);
}
