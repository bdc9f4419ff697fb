//! Integration tests for the valo-rs crates.
//!
//! These tests exercise the contracts that span crate boundaries: the
//! resolution protocol round-trips, the conversion graph, and the
//! cross-type geometric predicates.

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use valo_core::{Resolvable, ValidationError};

    /// Every value type must survive `resolve(to_array())` and
    /// `resolve(to_string())` unchanged.
    #[test]
    fn test_array_and_string_roundtrips() {
        use valo_color::{Hsla, Rgba};
        use valo_geom::{BoundingBox, Circle, Rectangle, Size};
        use valo_math::{Mat3, Mat4, Quaternion, Vec2, Vec3};

        let v2 = Vec2::new(1.5, -2.0);
        assert_eq!(Vec2::resolve(v2.to_array()).unwrap(), v2);
        assert_eq!(Vec2::resolve(v2.to_string()).unwrap(), v2);

        let v3 = Vec3::new(1.0, 2.5, -3.0);
        assert_eq!(Vec3::resolve(v3.to_array()).unwrap(), v3);
        assert_eq!(Vec3::resolve(v3.to_string()).unwrap(), v3);

        let size = Size::new(640.0, 480.0);
        assert_eq!(Size::resolve(size.to_array()).unwrap(), size);
        assert_eq!(Size::resolve(size.to_string()).unwrap(), size);

        let bbox = BoundingBox::new(0.0, 10.0, 0.0, 20.0);
        assert_eq!(BoundingBox::resolve(bbox.to_array()).unwrap(), bbox);
        assert_eq!(BoundingBox::resolve(bbox.to_string()).unwrap(), bbox);

        let circle = Circle::new((1.0, 2.0), 5.0);
        assert_eq!(Circle::resolve(circle.to_array()).unwrap(), circle);
        assert_eq!(Circle::resolve(circle.to_string()).unwrap(), circle);

        let rect = Rectangle::new((0.5, 1.5), (10.0, 10.0));
        assert_eq!(Rectangle::resolve(rect.to_array()).unwrap(), rect);
        assert_eq!(Rectangle::resolve(rect.to_string()).unwrap(), rect);

        let m3 = Mat3::IDENTITY.rotate(0.0).translate((3.0, 4.0));
        assert_eq!(Mat3::resolve(m3.to_array()).unwrap(), m3);
        assert_eq!(Mat3::resolve(m3.to_string()).unwrap(), m3);

        let m4 = Mat4::IDENTITY.translate((1.0, 2.0, 3.0));
        assert_eq!(Mat4::resolve(m4.to_array()).unwrap(), m4);
        assert_eq!(Mat4::resolve(m4.to_string()).unwrap(), m4);

        let q = Quaternion::new(1.0, -0.5, 0.25, 2.0);
        assert_eq!(Quaternion::resolve(q.to_array()).unwrap(), q);
        assert_eq!(Quaternion::resolve(q.to_string()).unwrap(), q);

        // Color channels quantize to 255ths in the string form, so the
        // round-trip samples sit on that grid.
        let rgba = Rgba::new(1.0, 102.0 / 255.0, 0.0, 0.5).unwrap();
        assert_eq!(Rgba::resolve(rgba.to_array_alpha()).unwrap(), rgba);
        assert_eq!(Rgba::resolve(rgba.to_string()).unwrap(), rgba);

        let hsla = Hsla::new(51.0 / 255.0, 1.0, 0.0, 1.0).unwrap();
        assert_eq!(Hsla::resolve(hsla.to_array_alpha()).unwrap(), hsla);
        assert_eq!(Hsla::resolve(hsla.to_string()).unwrap(), hsla);
    }

    /// Channel updates can never escape [0, 1], whatever the input.
    #[test]
    fn test_color_clamp_invariant() {
        use valo_color::{Hsla, Rgba};

        let inputs = [-1e9, -1.0, -0.0, 0.25, 1.0, 1.5, 1e9];
        for &v in &inputs {
            let c = Rgba::new(v, v, v, v).unwrap();
            for channel in c.to_array_alpha() {
                assert!((0.0..=1.0).contains(&channel), "channel {channel} escaped");
            }
            let c = Rgba::BLACK
                .with_red(v)
                .with_green(v)
                .with_blue(v)
                .with_alpha(v);
            for channel in c.to_array_alpha() {
                assert!((0.0..=1.0).contains(&channel));
            }
            let c = Hsla::new(v, v, v, v).unwrap();
            for channel in c.to_array_alpha() {
                assert!((0.0..=1.0).contains(&channel));
            }
        }
    }

    /// RGB -> HSL -> RGB is the identity within float tolerance, except
    /// that grays conventionally land on hue 0.
    #[test]
    fn test_color_conversion_roundtrip() {
        use valo_color::Rgba;

        let mut samples = Vec::new();
        for r in 0..5 {
            for g in 0..5 {
                for b in 0..5 {
                    samples.push([r as f64 / 4.0, g as f64 / 4.0, b as f64 / 4.0]);
                }
            }
        }
        for [r, g, b] in samples {
            let original = Rgba::resolve([r, g, b]).unwrap();
            let back = original.to_hsl().to_rgb();
            assert_relative_eq!(back.red(), r, epsilon = 1e-9);
            assert_relative_eq!(back.green(), g, epsilon = 1e-9);
            assert_relative_eq!(back.blue(), b, epsilon = 1e-9);
        }

        // The gray boundary: hue is undefined and conventionally 0.
        let gray = Rgba::resolve([0.5, 0.5, 0.5]).unwrap().to_hsl();
        assert_eq!(gray.hue(), 0.0);
        assert_eq!(gray.saturation(), 0.0);
    }

    #[test]
    fn test_matrix_identity_and_inverse() {
        use valo_math::Mat4;

        assert_eq!(Mat4::IDENTITY.multiply(Mat4::IDENTITY), Mat4::IDENTITY);

        let m = Mat4::IDENTITY
            .scale((2.0, 3.0, 4.0))
            .rotate((0.3, -0.8, 1.2))
            .translate((5.0, 6.0, 7.0));
        let inv = m.inverse().unwrap();
        let product = m.multiply(inv);
        for (value, expected) in product
            .to_array()
            .iter()
            .zip(Mat4::IDENTITY.to_array())
        {
            assert_relative_eq!(*value, expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_quadratic_roots() {
        use valo_algebra::QuadraticFunction;

        let f = QuadraticFunction::new(1.0, -3.0, 2.0).unwrap();
        let mut xs: Vec<f64> = f.roots().iter().map(|p| p.x).collect();
        xs.sort_by(f64::total_cmp);
        assert_eq!(xs, vec![1.0, 2.0]);

        let no_roots = QuadraticFunction::new(1.0, 0.0, 1.0).unwrap();
        assert!(no_roots.roots().is_empty());

        let err = QuadraticFunction::new(0.0, 1.0, 1.0).unwrap_err();
        assert!(matches!(err, ValidationError::ZeroCoefficient { .. }));
    }

    #[test]
    fn test_rectangle_bounding_box_duality() {
        use valo_geom::Rectangle;

        let cases = [
            Rectangle::new((0.0, 0.0), (10.0, 10.0)),
            Rectangle::new((-5.0, 2.5), (1.0, 40.0)),
            Rectangle::new((100.0, -100.0), (0.25, 0.75)),
        ];
        for rect in cases {
            assert_eq!(rect.to_bounding_box().to_rectangle(), rect);
        }
    }

    #[test]
    fn test_resolve_failure_reports_target_and_value() {
        use valo_math::Vec2;

        let err = Vec2::resolve("not-a-vector").unwrap_err();
        assert_eq!(err.target, "Vec2");
        assert!(err.value.contains("not-a-vector"));
        assert!(err.to_string().contains("Vec2"));
        assert!(err.to_string().contains("not-a-vector"));
    }

    #[test]
    fn test_circle_in_box() {
        use valo_geom::BoundingBox;

        let bbox = BoundingBox::new(0.0, 10.0, 0.0, 10.0);
        assert!(bbox.inside_circle(((5.0, 5.0), 1.0)));
        assert!(!bbox.inside_circle(((20.0, 20.0), 1.0)));
    }

    /// The conversion graph: each `to_*` output is a valid `Like` input
    /// for the target type.
    #[test]
    fn test_conversion_graph() {
        use valo_color::{Hsla, Rgba};
        use valo_geom::{Rectangle, Size};
        use valo_math::{Quaternion, Vec2, Vec3};

        // Vec3 -> color (normalized components).
        let color = Rgba::resolve(Vec3::new(3.0, 0.0, 0.0)).unwrap();
        assert_eq!(color.red(), 1.0);

        // Size <-> Vec2.
        let size = Size::resolve(Vec2::new(8.0, 6.0)).unwrap();
        assert_eq!(size, Size::new(8.0, 6.0));
        assert_eq!(Vec2::resolve(size).unwrap(), Vec2::new(8.0, 6.0));

        // Color -> vector and back through the color resolver.
        let rgba = Rgba::new(0.25, 0.5, 0.75, 1.0).unwrap();
        let as_vec3 = rgba.to_vec3();
        assert_eq!(as_vec3.to_array_w(), [0.25, 0.5, 0.75, 1.0]);

        // Rgba <-> Hsla as delegate shapes.
        let hsla = Hsla::resolve(rgba).unwrap();
        let back = Rgba::resolve(hsla).unwrap();
        assert_relative_eq!(back.red(), 0.25, epsilon = 1e-9);

        // Rotation -> matrix keeps the action identical.
        let q = Quaternion::from_axis_angle(Vec3::Z, 0.7);
        let via_quat = q.transform_vector(Vec3::new(1.0, 2.0, 3.0));
        let via_mat = q.to_mat4().transform_point(Vec3::new(1.0, 2.0, 3.0));
        assert_relative_eq!(via_quat.x, via_mat.x, epsilon = 1e-12);
        assert_relative_eq!(via_quat.y, via_mat.y, epsilon = 1e-12);

        // Rectangle resolves from a bounding box and vice versa.
        let rect = Rectangle::new((1.0, 2.0), (3.0, 4.0));
        let bbox = rect.to_bounding_box();
        assert_eq!(Rectangle::resolve(bbox).unwrap(), rect);
    }

    /// Transforms compose: parents apply after children, and 3D world
    /// rotation is a true rotation.
    #[test]
    fn test_transform_world_queries() {
        use valo_math::{Quaternion, Vec3};
        use valo_transform::{Transform3D, TransformArena3D};

        let quarter = Quaternion::from_axis_angle(Vec3::Z, std::f64::consts::FRAC_PI_2);
        let mut arena = TransformArena3D::new();
        let root = arena.insert(
            Transform3D::new((0.0, 0.0, 5.0), quarter, Vec3::ONE),
            None,
        );
        let child = arena.insert(
            Transform3D::new((1.0, 0.0, 0.0), Quaternion::IDENTITY, Vec3::ONE),
            Some(root),
        );

        let world = arena.global_matrix(child).transform_point(Vec3::ZERO);
        assert_relative_eq!(world.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(world.y, 1.0, epsilon = 1e-12);
        assert_relative_eq!(world.z, 5.0, epsilon = 1e-12);

        assert_relative_eq!(
            arena.global_rotation(child).length(),
            1.0,
            epsilon = 1e-12
        );
    }

    /// Serde round-trips for the serializable value types.
    #[test]
    fn test_serde_json_roundtrips() {
        use valo_color::Rgba;
        use valo_geom::Rectangle;
        use valo_math::{Mat3, Vec2, Vec3};

        let v2 = Vec2::with_w(1.0, 2.0, 0.5);
        let json = serde_json::to_string(&v2).unwrap();
        assert_eq!(serde_json::from_str::<Vec2>(&json).unwrap(), v2);

        let v3 = Vec3::new(1.0, 2.0, 3.0);
        let json = serde_json::to_string(&v3).unwrap();
        assert_eq!(serde_json::from_str::<Vec3>(&json).unwrap(), v3);

        let m = Mat3::IDENTITY.translate((3.0, 4.0));
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(serde_json::from_str::<Mat3>(&json).unwrap(), m);

        let rect = Rectangle::new((1.0, 2.0), (3.0, 4.0));
        let json = serde_json::to_string(&rect).unwrap();
        assert_eq!(serde_json::from_str::<Rectangle>(&json).unwrap(), rect);

        let color = Rgba::new(1.0, 0.5, 0.0, 0.25).unwrap();
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(serde_json::from_str::<Rgba>(&json).unwrap(), color);
    }

    /// The two error tiers stay distinct: constructors validate fields,
    /// resolvers reject shapes.
    #[test]
    fn test_error_tiers() {
        use valo_color::Rgba;
        use valo_math::Vec2;

        let validation = Vec2::try_new(f64::NAN, 0.0, 1.0).unwrap_err();
        assert!(validation.is_non_finite());

        let validation = Rgba::new(0.5, f64::INFINITY, 0.0, 1.0).unwrap_err();
        assert!(validation.is_non_finite());

        let resolve = Vec2::resolve("x,y").unwrap_err();
        assert_eq!(resolve.target, "Vec2");

        // Out-of-range is not an error anywhere, only non-finite is.
        assert!(Rgba::new(99.0, -99.0, 0.0, 1.0).is_ok());
    }
}
