//! Randomized exercise of the neutrality equivalence.
//!
//! Neutrality itself quantifies over an open-ended space of frameworks
//! and cannot be enumerated. These tests check the two directions of the
//! equivalence over randomly generated ontologies, with framework
//! generation constrained to the domain axioms: every non-neutral
//! primitive has a denying framework available (framework relativity),
//! and generated frameworks never deny neutral primitives (neutral
//! primitives undisputed).

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use ontic::{
    extension_inconsistent, inconsistency_witness, neutrality, AdmissibilityPolicy, Framework,
    Ontology, PermitAllConsistent, Primitive, PrimitiveKind,
};

const ROUNDS: usize = 500;
const FRAMEWORKS_PER_ONTOLOGY: usize = 20;

fn random_kind(rng: &mut StdRng) -> PrimitiveKind {
    match rng.gen_range(0..3) {
        0 => PrimitiveKind::Causal,
        1 => PrimitiveKind::Normative,
        _ => PrimitiveKind::Neutral,
    }
}

fn random_primitive(rng: &mut StdRng) -> Primitive {
    // Small id pool so ontologies repeat primitives and frameworks hit
    // actual members.
    let id = format!("p{}", rng.gen_range(0..8));
    Primitive::new(random_kind(rng), id).unwrap()
}

fn random_ontology(rng: &mut StdRng) -> Ontology {
    let len = rng.gen_range(0..12);
    (0..len).map(|_| random_primitive(rng)).collect()
}

/// A random framework satisfying both domain axioms: denial is restricted
/// to non-neutral primitives, affirmation and silence are unrestricted.
fn random_axiom_compliant_framework(rng: &mut StdRng, ontology: &Ontology) -> Framework {
    let mut builder = Framework::builder();
    let mut denied: Vec<Primitive> = Vec::new();
    let mut affirmed: Vec<Primitive> = Vec::new();

    // Duplicates in the ontology revisit the same primitive; the guards
    // keep the two stance sets disjoint so build() always succeeds.
    for primitive in ontology {
        match rng.gen_range(0..3) {
            0 if !primitive.kind.is_neutral() && !affirmed.contains(primitive) => {
                denied.push(primitive.clone());
                builder = builder.deny(primitive.clone());
            }
            1 if !denied.contains(primitive) => {
                affirmed.push(primitive.clone());
                builder = builder.affirm(primitive.clone());
            }
            _ => {} // silent
        }
    }

    // Stances on primitives outside the ontology exercise the
    // membership condition of extension inconsistency.
    for _ in 0..rng.gen_range(0..4) {
        let outsider = Primitive::new(random_kind(rng), format!("q{}", rng.gen_range(0..8)))
            .unwrap();
        if !outsider.kind.is_neutral() {
            builder = builder.deny(outsider);
        }
    }

    builder.build().expect("generated stances never conflict")
}

#[test]
fn forward_scan_true_implies_some_admissible_framework_inconsistent() {
    let mut rng = StdRng::seed_from_u64(0x0617);
    let policy = PermitAllConsistent;

    let mut exercised = 0;
    for _ in 0..ROUNDS {
        let ontology = random_ontology(&mut rng);
        if !ontology.contains_causal_or_normative() {
            continue;
        }
        exercised += 1;

        // Framework relativity supplies a framework denying the witness.
        let witness = ontology.first_non_neutral().unwrap().clone();
        assert!(!witness.kind.is_neutral());

        let contesting = Framework::builder().deny(witness.clone()).build().unwrap();
        assert!(policy.admits(&contesting));

        // The witness is a member and is denied, so the extension is
        // inconsistent and the ontology is not neutral.
        assert!(extension_inconsistent(&ontology, &contesting));
        assert_eq!(inconsistency_witness(&ontology, &contesting), Some(&witness));
        assert!(!neutrality::assess(&ontology).is_neutral());
    }

    assert!(exercised > 100, "generator produced too few contested ontologies");
}

#[test]
fn backward_scan_false_implies_no_axiom_compliant_framework_inconsistent() {
    let mut rng = StdRng::seed_from_u64(0x0618);

    let mut exercised = 0;
    for _ in 0..ROUNDS {
        let ontology = random_ontology(&mut rng);
        if ontology.contains_causal_or_normative() {
            continue;
        }
        exercised += 1;

        // Every member is neutral-kind; under the second axiom no
        // admissible framework denies any of them.
        for _ in 0..FRAMEWORKS_PER_ONTOLOGY {
            let framework = random_axiom_compliant_framework(&mut rng, &ontology);
            assert!(
                !extension_inconsistent(&ontology, &framework),
                "axiom-compliant framework denied a member of an all-neutral ontology"
            );
        }
        assert!(neutrality::assess(&ontology).is_neutral());
    }

    assert!(exercised > 20, "generator produced too few all-neutral ontologies");
}

#[test]
fn verdict_matches_scan_on_random_ontologies() {
    let mut rng = StdRng::seed_from_u64(0x0619);

    for _ in 0..ROUNDS {
        let ontology = random_ontology(&mut rng);
        assert_eq!(
            neutrality::assess(&ontology).is_neutral(),
            !ontology.contains_causal_or_normative()
        );
    }
}

#[test]
fn scan_deterministic_and_order_independent_on_random_ontologies() {
    let mut rng = StdRng::seed_from_u64(0x061a);

    for _ in 0..ROUNDS {
        let ontology = random_ontology(&mut rng);
        let result = ontology.contains_causal_or_normative();

        // Re-scanning never changes the answer.
        assert_eq!(ontology.contains_causal_or_normative(), result);

        // Neither does permuting the sequence.
        let mut shuffled: Vec<Primitive> = ontology.iter().cloned().collect();
        shuffled.shuffle(&mut rng);
        let permuted = Ontology::new(shuffled);
        assert_eq!(permuted.contains_causal_or_normative(), result);
    }
}

#[test]
fn axiom_compliant_frameworks_never_deny_neutral_primitives() {
    let mut rng = StdRng::seed_from_u64(0x061b);

    for _ in 0..ROUNDS {
        let ontology = random_ontology(&mut rng);
        let framework = random_axiom_compliant_framework(&mut rng, &ontology);
        for denied in framework.denied_primitives() {
            assert!(!denied.kind.is_neutral());
        }
    }
}
