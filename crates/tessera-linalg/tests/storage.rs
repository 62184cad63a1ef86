use std::cell::Cell;

use tessera_linalg::*;

fn block(len: usize) -> Vec<Cell<f64>> {
    (0..len).map(|i| Cell::new(i as f64)).collect()
}

#[test]
fn column_major_native_view() {
    let cells = block(4);
    let mut m = BufferMatrix::<f64, 2>::new(&cells, 0);
    for (r, c, value) in [(0, 0, 0.0), (0, 1, 1.0), (1, 0, 100.0), (1, 1, 101.0)] {
        m.set(r, c, value).unwrap();
    }

    let view = m.native_view().unwrap();
    assert_eq!(view.len(), 4);
    let values: Vec<f64> = view.iter().map(Cell::get).collect();
    assert_eq!(values, [0.0, 100.0, 1.0, 101.0]);

    for r in 0..4 {
        for c in 0..4 {
            let cells = block(32);
            let mut m = BufferMatrix::<f64, 4>::new(&cells, 7);
            m.set(r, c, -1.0).unwrap();
            assert_eq!(cells[7 + c * 4 + r].get(), -1.0);
        }
    }
}

#[test]
fn views_past_the_block_fail_every_access() {
    let cells = block(200);
    for offset in [i32::MAX as usize, 200, usize::MAX] {
        let mut m = BufferMatrix::<f64, 2>::new(&cells, offset);
        for (r, c) in [(0, 0), (0, 1), (1, 0), (1, 1)] {
            let err = m.get(r, c).unwrap_err();
            assert!(err.is_index_out_of_range(), "{err}");
            let err = m.set(r, c, 1.0).unwrap_err();
            assert!(err.is_index_out_of_range(), "{err}");
        }
        assert!(m.to_matrix().is_err());
        assert!(m.native_view().is_err());
    }
    assert!(cells.iter().enumerate().all(|(i, c)| c.get() == i as f64));

    // The last element that still fits.
    let m = BufferMatrix::<f64, 2>::new(&cells, 196);
    assert_eq!(m.get(1, 1).unwrap(), 199.0);
    let m = BufferMatrix::<f64, 2>::new(&cells, 197);
    assert_eq!(m.get(0, 0).unwrap(), 197.0);
    assert!(m.get(1, 1).is_err());
}

#[test]
fn out_of_range_errors_describe_the_access() {
    let cells = block(10);
    let v = BufferVector::<f64, 4>::new(&cells, 8);
    assert_eq!(
        v.get(2),
        Err(LinalgError::IndexOutOfRange {
            index: 2,
            count: 4,
            physical: Some(10),
            capacity: 10,
        })
    );

    let v = BufferVector::<f64, 4>::new(&cells, usize::MAX);
    assert_eq!(
        v.get(1),
        Err(LinalgError::IndexOutOfRange {
            index: 1,
            count: 4,
            physical: None,
            capacity: 10,
        })
    );
    assert!(v.get(4).unwrap_err().is_index_out_of_range());
}

#[test]
fn snapshot_round_trip() {
    let mut buffer = [0.0f32; 9 + 9];
    let cells = shared_cells(&mut buffer);
    let mut a = BufferMatrix::<f32, 3>::new(cells, 0);
    a.set_all(Matrix::from_fn(|r, c| (r * 3 + c) as f32 * 0.1))
        .unwrap();

    let snapshot = Matrix::from_readable(&a).unwrap();
    let mut b = BufferMatrix::<f32, 3>::new(cells, 9);
    make_matrix(&snapshot, &mut b).unwrap();
    assert_eq!(b.to_matrix().unwrap(), a.to_matrix().unwrap());
    assert_eq!(a.native_bytes().unwrap(), b.native_bytes().unwrap());

    let mut owned = ArrayMatrix::<f32, 3>::default();
    make_matrix(&b, &mut owned).unwrap();
    assert_eq!(owned.to_matrix().unwrap(), snapshot);
}

#[test]
fn vectors_and_matrices_share_a_buffer() {
    let mut buffer = [0.0f64; 16];
    let cells = shared_cells(&mut buffer);
    let mut m = BufferMatrix::<f64, 4>::new(cells, 0);
    let mut translation = BufferVector::<f64, 4>::new(cells, 12);

    m.set_identity().unwrap();
    translation.set_all(vec4(1.0, 2.0, 3.0, 1.0)).unwrap();
    assert_eq!(
        m.to_matrix().unwrap(),
        Mat4d::from_translation(vec3(1.0, 2.0, 3.0))
    );

    m.column_into(0, &mut translation).unwrap();
    assert_eq!(m.column(3).unwrap(), Vec4d::X);
    assert_eq!(buffer, {
        let mut expected = [0.0; 16];
        expected[0] = 1.0;
        expected[5] = 1.0;
        expected[10] = 1.0;
        expected[12] = 1.0;
        expected
    });
}
