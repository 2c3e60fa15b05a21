// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! Properties of the swizzle algebra and the host/device contract, across arities and kinds.

#[cfg(target_arch = "wasm32")]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

use shading_types::accessor;
use shading_types::{
    Alphabet, Bool, Classification, Double2, Float2, Float3, Float4, Half4, Int2, Int3, Member,
    Operator, Scalar, ScalarKind, Selection, SentinelRegion, ShaderType, Swizzle, SwizzleMut,
    UInt4, Vector,
};

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
fn labels_alias_the_same_slot() {
    let mut v2 = Int2::new(1, 2);
    *v2.x_mut() = 10;
    assert_eq!(v2.r(), 10);
    v2.set_g(20);
    assert_eq!(v2.y(), 20);

    let mut v3 = Float3::new(1.0, 2.0, 3.0);
    *v3.b_mut() = 30.0;
    assert_eq!(v3.z(), 30.0);

    let mut v4 = UInt4::ZERO;
    v4.set_w(7);
    assert_eq!(v4.a(), 7);
    *v4.r_mut() = 5;
    assert_eq!(v4.x(), 5);
    assert_eq!(v4, UInt4::new(5, 0, 0, 7));
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
fn mutable_iff_distinct() {
    for arity in 2..=4 {
        for selection in Selection::enumerate(arity).unwrap() {
            let indices = selection.indices();
            let mut seen = Vec::new();
            let repeated = indices.iter().any(|i| {
                let dup = seen.contains(i);
                seen.push(*i);
                dup
            });
            assert_eq!(selection.is_mutable(), !repeated, "{:?}", indices);
        }
    }
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
fn names_round_trip_in_both_alphabets() {
    for arity in 2..=4 {
        for selection in Selection::enumerate(arity).unwrap() {
            for alphabet in Alphabet::ALL {
                let name = selection.name(alphabet);
                assert_eq!(Selection::parse(arity, &name), Ok(selection));
            }
        }
    }
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
fn broadcast_fills_every_slot() {
    assert_eq!(Float2::from(3.5).as_array(), &[3.5; 2]);
    assert_eq!(Int3::from(-2).as_array(), &[-2; 3]);
    assert_eq!(Vector::<Bool, 4>::from(Bool::TRUE).as_array(), &[Bool::TRUE; 4]);
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
fn unit_vectors() {
    fn check<T: Scalar, const N: usize>()
    where
        shading_types::vector::Arity<N>: shading_types::vector::SupportedArity,
    {
        for slot in 0..N {
            let unit = Vector::<T, N>::unit(slot).unwrap();
            for (i, &c) in unit.as_array().iter().enumerate() {
                assert_eq!(c, if i == slot { T::ONE } else { T::ZERO });
            }
        }
        assert!(Vector::<T, N>::ZERO.as_array().iter().all(|&c| c == T::ZERO));
        assert!(Vector::<T, N>::ONE.as_array().iter().all(|&c| c == T::ONE));
    }
    check::<f32, 2>();
    check::<f64, 3>();
    check::<i32, 4>();
    check::<u32, 2>();
    check::<shading_types::f16, 3>();
    check::<Bool, 4>();
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
fn value_members_fail_for_every_arity() {
    fn check<const N: usize>()
    where
        shading_types::vector::Arity<N>: shading_types::vector::SupportedArity,
    {
        let v = Vector::<f32, N>::ONE;
        let expected = ShaderType::Vector(ScalarKind::Float, N);
        let results = [
            ((v + v).unwrap_err(), Member::Operator(Operator::Add)),
            ((v - v).unwrap_err(), Member::Operator(Operator::Sub)),
            ((v * 2.0).unwrap_err(), Member::Operator(Operator::Mul)),
            ((v / v).unwrap_err(), Member::Operator(Operator::Div)),
            ((v % v).unwrap_err(), Member::Operator(Operator::Rem)),
            ((-v).unwrap_err(), Member::Operator(Operator::Neg)),
            (v.at(0).unwrap_err(), Member::Index),
            (v.cast::<i32>().unwrap_err(), Member::Cast),
        ];
        for (err, member) in results {
            assert_eq!(err.shader_type(), expected);
            assert_eq!(err.member(), member);
        }
    }
    check::<2>();
    check::<3>();
    check::<4>();
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
fn multi_component_writes_go_to_the_sentinel() {
    let mut v = Double2::new(1.0, 2.0);
    let mut yx = v.swizzle_mut(SwizzleMut::new([1, 0]));
    assert!(std::ptr::eq(yx.region(), SentinelRegion::<f64>::of::<2>()));
    yx.set(Double2::new(8.0, 9.0));
    assert_eq!(yx.get(), Double2::ZERO);
    assert_eq!(v, Double2::new(1.0, 2.0));

    let mut h = Half4::ONE;
    let field = h.as_array().as_ptr();
    let xyzw = h.swizzle_mut(SwizzleMut::new([0, 1, 2, 3]));
    assert_ne!(xyzw.as_ptr(), field);
    assert_eq!(
        xyzw.region().owner(),
        ShaderType::Vector(ScalarKind::Half, 4)
    );
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
fn single_component_swizzles_are_real() {
    let mut v = Float4::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(v.swizzle(Swizzle::new([3])), Ok(4.0));
    *v.swizzle_mut(SwizzleMut::new([0])) = 9.0;
    assert_eq!(v.x(), 9.0);
    assert_eq!(v.r(), 9.0);
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
fn accessor_table_matches_selector_behavior() {
    let ty = Float3::SHADER_TYPE;
    let v = Float3::new(1.0, 2.0, 3.0);
    for def in accessor::accessors(ty).unwrap() {
        match def.classification {
            Classification::HostValid => {
                let slot = def.selection.indices()[0];
                assert_eq!(v.as_array()[slot], [1.0, 2.0, 3.0][slot]);
            }
            Classification::DeviceOnly => assert!(def.result_type.arity() > 1),
        }
    }
    let xy = accessor::find(ty, "xy").unwrap();
    assert_eq!(xy.classification, Classification::DeviceOnly);
    assert!(v.swizzle(Swizzle::new([0, 1])).is_err());
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
fn end_to_end_four_slots() {
    let v = Float4::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(v.x(), 1.0);
    assert_eq!(v.r(), 1.0);
    assert_eq!(v.w(), 4.0);
    assert_eq!(v.a(), 4.0);
    assert_eq!(Float4::UNIT_Z, Float4::new(0.0, 0.0, 1.0, 0.0));
    assert_eq!(Float2::ZERO, Float2::new(0.0, 0.0));
    assert_eq!(v.to_string(), "<1, 2, 3, 4>");
    assert_eq!(Float3::new(1.0, 2.0, 3.0).to_string(), "<1, 2, 3>");
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
fn swizzle_failures_identify_the_accessor() {
    let v = Float4::ONE;
    let xy = v.swizzle(Swizzle::new([0, 1])).unwrap_err();
    let wz = v.swizzle(Swizzle::new([3, 2])).unwrap_err();
    let bgr = v.swizzle(Swizzle::new([2, 1, 0])).unwrap_err();
    assert_ne!(xy, wz);
    assert_ne!(xy.member(), wz.member());
    assert_eq!(xy.to_string(), "float4.xy is only available in code translated for the device");
    assert_eq!(wz.to_string(), "float4.wz is only available in code translated for the device");
    assert_eq!(bgr.to_string(), "float4.zyx is only available in code translated for the device");
    assert_eq!(
        wz.member(),
        Member::Swizzle {
            selection: Selection::parse(4, "ab").unwrap()
        }
    );
}

#[test]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]
fn sentinel_refs_have_the_selection_length() {
    let mut v = Float4::new(1.0, 2.0, 3.0, 4.0);
    let two: shading_types::SentinelRef<'_, f32, 2> = v.swizzle_mut(SwizzleMut::new([3, 0]));
    assert_eq!(two.get(), Float2::ZERO);
    let three: shading_types::SentinelRef<'_, f32, 3> =
        v.swizzle_mut(SwizzleMut::new([2, 1, 0]));
    assert_eq!(three.get(), Float3::ZERO);
    let mut four: shading_types::SentinelRef<'_, f32, 4> =
        v.swizzle_mut(SwizzleMut::new([3, 2, 1, 0]));
    four.set(Float4::ONE);
    assert_eq!(four.get(), Float4::ZERO);
    assert!(std::ptr::eq(four.region(), SentinelRegion::<f32>::of::<4>()));
    assert_eq!(four.region().capacity(), 4);
    assert_eq!(v, Float4::new(1.0, 2.0, 3.0, 4.0));
}
