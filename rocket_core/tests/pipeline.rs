//! End-to-end checks of the sizing pipeline through the public API.

use rocket_core::calculations::{calculate, calculate_with, evaluate, QUANTITY_COUNT};
use rocket_core::file_io::{MemorySink, ResultSink};
use rocket_core::geometry::{ChamberNozzleProfile, FlangeLayout, FlangeSpec};
use rocket_core::interpolation::ClampSide;
use rocket_core::{CalcError, DesignAssumptions, DesignRequest, Fuel};

#[test]
fn gasoline_reference_total_flow() {
    let result = calculate(&DesignRequest::default()).unwrap();
    assert!((result.total_propellant_flow.0 - 0.3252).abs() < 1e-3);
    assert!((result.fuel_flow.0 + result.oxidizer_flow.0 - result.total_propellant_flow.0).abs() < 1e-12);
}

#[test]
fn chamber_pressure_below_table_clamps_and_reports() {
    let request = DesignRequest {
        chamber_pressure_psi: 50.0,
        ..DesignRequest::default()
    };
    let evaluation = evaluate(&request).unwrap();
    assert_eq!(evaluation.result.specific_impulse.0, 220.0);

    let isp_clamp = evaluation
        .clamps
        .iter()
        .find(|c| c.table == "gasoline_specific_impulse")
        .unwrap();
    assert_eq!(isp_clamp.side, ClampSide::Below);
    assert_eq!(isp_clamp.query, 50.0);
    assert_eq!(isp_clamp.bound, 100.0);
}

#[test]
fn identical_inputs_give_identical_outputs() {
    let request = DesignRequest::for_fuel(Fuel::Alcohol);
    let a = calculate(&request).unwrap();
    let b = calculate(&request).unwrap();
    for (x, y) in a.quantities().iter().zip(b.quantities().iter()) {
        assert_eq!(x.value.to_bits(), y.value.to_bits(), "{} differs", x.name);
    }
}

#[test]
fn concurrent_evaluations_match_sequential() {
    let requests: Vec<DesignRequest> = [100.0, 200.0, 400.0, 800.0]
        .into_iter()
        .flat_map(|thrust| {
            Fuel::ALL.into_iter().map(move |fuel| DesignRequest {
                thrust_lbf: thrust,
                ..DesignRequest::for_fuel(fuel)
            })
        })
        .collect();

    let sequential: Vec<_> = requests.iter().map(|r| calculate(r).unwrap()).collect();
    let parallel: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = requests
            .iter()
            .map(|r| scope.spawn(move || calculate(r).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(sequential, parallel);
}

#[test]
fn zero_holes_is_rejected_without_partial_result() {
    let request = DesignRequest {
        fuel_holes: 0,
        ..DesignRequest::default()
    };
    match calculate(&request) {
        Err(CalcError::InvalidInput { field, .. }) => assert_eq!(field, "fuel_holes"),
        other => panic!("expected InvalidInput, got {:?}", other),
    }
}

#[test]
fn every_result_has_the_same_keys() {
    let keys = |fuel: Fuel| -> Vec<String> {
        calculate(&DesignRequest::for_fuel(fuel))
            .unwrap()
            .quantities()
            .iter()
            .map(|q| q.key())
            .collect()
    };
    let gasoline = keys(Fuel::Gasoline);
    assert_eq!(gasoline.len(), QUANTITY_COUNT);
    assert_eq!(gasoline, keys(Fuel::Alcohol));
    assert_eq!(gasoline, keys(Fuel::Ethanol));
}

#[test]
fn ethanol_uses_gasoline_data() {
    let ethanol = calculate(&DesignRequest {
        mixture_ratio: 2.5,
        ..DesignRequest::for_fuel(Fuel::Ethanol)
    })
    .unwrap();
    let gasoline = calculate(&DesignRequest::for_fuel(Fuel::Gasoline)).unwrap();
    assert_eq!(ethanol, gasoline);
}

#[test]
fn higher_thrust_gives_larger_engine() {
    let small = calculate(&DesignRequest::default()).unwrap();
    let large = calculate(&DesignRequest {
        thrust_lbf: 800.0,
        ..DesignRequest::default()
    })
    .unwrap();
    assert!(large.throat_diameter.0 > small.throat_diameter.0);
    assert!(large.chamber_volume.0 > small.chamber_volume.0);
    assert!(large.coolant_flow.0 > small.coolant_flow.0);
}

#[test]
fn custom_basis_changes_only_dependent_quantities() {
    let request = DesignRequest::default();
    let base = calculate(&request).unwrap();
    let basis = DesignAssumptions {
        coolant_temperature_rise_r: 80.0,
        ..DesignAssumptions::default()
    };
    let warm = calculate_with(&request, &basis).unwrap();
    assert_eq!(warm.throat_diameter, base.throat_diameter);
    assert!((warm.coolant_flow.0 - base.coolant_flow.0 / 2.0).abs() < 1e-9);
}

#[test]
fn sweep_into_memory_sink() {
    let mut sink = MemorySink::new();
    for pc in [200.0, 300.0, 400.0] {
        let request = DesignRequest {
            chamber_pressure_psi: pc,
            ..DesignRequest::default()
        };
        let result = calculate(&request).unwrap();
        sink.record(&request, &result).unwrap();
    }
    assert_eq!(sink.len(), 3);
    let throats: Vec<f64> = sink.designs.iter().map(|(_, r)| r.throat_diameter.0).collect();
    assert!(throats.windows(2).all(|w| w[1] < w[0]));
}

#[test]
fn profile_from_reference_design() {
    let result = calculate(&DesignRequest::default()).unwrap();
    let profile = ChamberNozzleProfile::from_result(&result);
    let expected = result.chamber_length.0 + result.convergent_length.0 + result.divergent_length.0;
    assert!((profile.overall_length().0 - expected).abs() < 1e-12);
}

#[test]
fn flange_sits_outside_the_chamber_wall() {
    let result = calculate(&DesignRequest::default()).unwrap();
    let profile = ChamberNozzleProfile::from_result(&result);
    let flange = FlangeLayout::from_result(&result, &FlangeSpec::default()).unwrap();
    assert_eq!(flange.groove_radius, profile.injector_face.outer_radius);
    assert!(flange.bolt_circle_radius.0 > flange.inner_radius.0);
    assert!(flange.bolt_circle_radius.0 < flange.outer_radius.0);
}
