use labelkit_core::{LabelGeometry, Offset, PathSegment, Positioning, Units};
use labelkit_toolpath::{
    format_program, CompileError, ProgramValidator, ToolInstruction, ToolpathCompiler,
};

fn geometry(segments: &[&[(f64, f64)]]) -> LabelGeometry {
    LabelGeometry::from_segments(
        segments
            .iter()
            .map(|coords| PathSegment::from_coords(coords))
            .collect(),
    )
}

#[test]
fn test_empty_geometry_produces_minimal_program() {
    let compiler = ToolpathCompiler::new(Offset::new(10.0, 10.0)).unwrap();
    let program = compiler.compile(&LabelGeometry::new()).unwrap();
    assert_eq!(
        program,
        vec![
            ToolInstruction::SetUnits(Units::Mm),
            ToolInstruction::SetPositioning(Positioning::Absolute),
            ToolInstruction::ReturnHome,
        ]
    );
}

#[test]
fn test_single_segment_sequence() {
    // One stroke from (0,0) to (10,0), anchored at origin (10,50).
    let compiler = ToolpathCompiler::new(Offset::new(10.0, 50.0)).unwrap();
    let program = compiler
        .compile(&geometry(&[&[(0.0, 0.0), (10.0, 0.0)]]))
        .unwrap();
    assert_eq!(
        program,
        vec![
            ToolInstruction::SetUnits(Units::Mm),
            ToolInstruction::SetPositioning(Positioning::Absolute),
            ToolInstruction::MoveTo { x: 10.0, y: 50.0 },
            ToolInstruction::ToolDown,
            ToolInstruction::DrawTo { x: 20.0, y: 50.0 },
            ToolInstruction::ToolUp,
            ToolInstruction::ReturnHome,
        ]
    );
}

#[test]
fn test_segments_drawn_in_order() {
    let compiler = ToolpathCompiler::new(Offset::new(0.0, 0.0)).unwrap();
    let program = compiler
        .compile(&geometry(&[
            &[(0.0, 0.0), (5.0, 0.0)],
            &[(0.0, 5.0), (5.0, 5.0), (5.0, 0.0)],
        ]))
        .unwrap();

    // 2 setup + (move/down/draw/up) + (move/down/draw/draw/up) + home
    assert_eq!(program.len(), 12);

    // First segment is fully drawn before the second begins.
    assert_eq!(program[2], ToolInstruction::MoveTo { x: 0.0, y: 0.0 });
    assert_eq!(program[4], ToolInstruction::DrawTo { x: 5.0, y: 0.0 });
    assert_eq!(program[5], ToolInstruction::ToolUp);
    assert_eq!(program[6], ToolInstruction::MoveTo { x: 0.0, y: 5.0 });
    assert_eq!(program[9], ToolInstruction::DrawTo { x: 5.0, y: 0.0 });
    assert_eq!(program[11], ToolInstruction::ReturnHome);
}

#[test]
fn test_instruction_count_arithmetic() {
    // Point counts [2, 3]: 2 setup + (1+1+1+1) + (1+1+2+1) + 1 home = 12.
    let compiler = ToolpathCompiler::new(Offset::new(3.0, 7.0)).unwrap();
    let program = compiler
        .compile(&geometry(&[
            &[(0.0, 0.0), (1.0, 1.0)],
            &[(2.0, 2.0), (3.0, 3.0), (4.0, 4.0)],
        ]))
        .unwrap();
    assert_eq!(program.len(), 12);
}

#[test]
fn test_origin_translation() {
    let compiler = ToolpathCompiler::new(Offset::new(10.0, 5.0)).unwrap();
    let program = compiler
        .compile(&geometry(&[&[(0.0, 0.0), (1.0, 2.0)]]))
        .unwrap();
    assert_eq!(program[2], ToolInstruction::MoveTo { x: 10.0, y: 5.0 });
    assert_eq!(program[4], ToolInstruction::DrawTo { x: 11.0, y: 7.0 });
}

#[test]
fn test_home_is_independent_of_origin() {
    let compiler = ToolpathCompiler::new(Offset::new(100.0, 200.0)).unwrap();
    let program = compiler.compile(&LabelGeometry::new()).unwrap();
    assert_eq!(*program.last().unwrap(), ToolInstruction::ReturnHome);
}

#[test]
fn test_degenerate_segments_skipped() {
    let compiler = ToolpathCompiler::new(Offset::new(10.0, 10.0)).unwrap();

    let single_point = compiler.compile(&geometry(&[&[(4.0, 4.0)]])).unwrap();
    let empty_segment = compiler.compile(&geometry(&[&[]])).unwrap();
    let nothing = compiler.compile(&LabelGeometry::new()).unwrap();

    // A degenerate segment behaves identically to no segment at all.
    assert_eq!(single_point, nothing);
    assert_eq!(empty_segment, nothing);
}

#[test]
fn test_degenerate_segment_between_drawable_ones() {
    let compiler = ToolpathCompiler::new(Offset::new(0.0, 0.0)).unwrap();
    let with_degenerate = compiler
        .compile(&geometry(&[
            &[(0.0, 0.0), (1.0, 0.0)],
            &[(9.0, 9.0)],
            &[(2.0, 0.0), (3.0, 0.0)],
        ]))
        .unwrap();
    let without = compiler
        .compile(&geometry(&[
            &[(0.0, 0.0), (1.0, 0.0)],
            &[(2.0, 0.0), (3.0, 0.0)],
        ]))
        .unwrap();
    assert_eq!(with_degenerate, without);
}

#[test]
fn test_non_finite_coordinate_rejected() {
    let compiler = ToolpathCompiler::new(Offset::new(0.0, 0.0)).unwrap();
    let result = compiler.compile(&geometry(&[
        &[(0.0, 0.0), (1.0, 0.0)],
        &[(2.0, 0.0), (f64::NAN, 0.0)],
    ]));
    match result {
        Err(CompileError::InvalidGeometry { segment, point, .. }) => {
            assert_eq!(segment, 1);
            assert_eq!(point, 1);
        }
        other => panic!("expected InvalidGeometry, got {:?}", other),
    }
}

#[test]
fn test_infinite_coordinate_rejected() {
    let compiler = ToolpathCompiler::new(Offset::new(0.0, 0.0)).unwrap();
    let result = compiler.compile(&geometry(&[&[(f64::INFINITY, 0.0), (1.0, 0.0)]]));
    assert!(matches!(
        result,
        Err(CompileError::InvalidGeometry { segment: 0, point: 0, .. })
    ));
}

#[test]
fn test_non_finite_origin_rejected() {
    assert!(matches!(
        ToolpathCompiler::new(Offset::new(f64::NAN, 0.0)),
        Err(CompileError::InvalidOrigin { .. })
    ));
    assert!(matches!(
        ToolpathCompiler::new(Offset::new(0.0, f64::NEG_INFINITY)),
        Err(CompileError::InvalidOrigin { .. })
    ));
}

#[test]
fn test_compilation_is_deterministic() {
    let compiler = ToolpathCompiler::new(Offset::new(10.0, 50.0)).unwrap();
    let input = geometry(&[
        &[(0.0, 0.0), (7.25, 0.5), (14.5, 0.0)],
        &[(1.0, 3.0), (2.0, 4.0)],
    ]);

    let first = compiler.compile(&input).unwrap();
    let second = compiler.compile(&input).unwrap();
    assert_eq!(first, second);
    assert_eq!(format_program(&first), format_program(&second));
}

#[test]
fn test_compiled_programs_are_well_formed() {
    let validator = ProgramValidator::default();
    let compiler = ToolpathCompiler::new(Offset::new(10.0, 10.0)).unwrap();

    let inputs = [
        LabelGeometry::new(),
        geometry(&[&[(0.0, 0.0), (10.0, 0.0)]]),
        geometry(&[&[(9.0, 9.0)]]),
        geometry(&[
            &[(0.0, 0.0), (5.0, 0.0)],
            &[(0.0, 5.0), (5.0, 5.0), (5.0, 0.0)],
        ]),
    ];
    for input in &inputs {
        let program = compiler.compile(input).unwrap();
        validator.validate(&program).unwrap();
    }
}
