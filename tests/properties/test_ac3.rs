//
// minicsp-rs is free software: you can redistribute it and/or modify
// it under the terms of the GNU Lesser General Public License  v3
// as published by the Free Software Foundation.
//
// minicsp-rs is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY.
// See the GNU Lesser General Public License  for more details.
//
// You should have received a copy of the GNU Lesser General Public License
// along with minicsp-rs. If not, see http://www.gnu.org/licenses/lgpl-3.0.en.html
//
// Copyright (c)  2022 by X. Gillard
//

use minicsp_rs::prelude::*;

use super::strategy::{blueprint_strategy, snapshot, solutions};

use proptest::{prop_assert, prop_assert_eq, prop_assume, proptest};

proptest! {
    #[test]
    fn consistent_pass_is_a_fixed_point(bp in blueprint_strategy()) {
        let (mut csp, _) = bp.build();
        let first = ac3(&mut csp);
        prop_assume!(!first.is_inconsistent());

        let second = ac3(&mut csp);
        prop_assert!(second.is_unchanged());
        prop_assert_eq!(Outcome::Consistent, second.outcome());
    }

    #[test]
    fn consistent_pass_leaves_every_value_supported(bp in blueprint_strategy()) {
        let (mut csp, vars) = bp.build();
        prop_assume!(!ac3(&mut csp).is_inconsistent());

        for (i, j, rel) in bp.arcs.iter().copied() {
            let xi = csp.domain(&vars[i]).unwrap();
            let xj = csp.domain(&vars[j]).unwrap();
            for a in xi.iter() {
                prop_assert!(xj.iter().any(|b| rel.holds(*a, *b)));
            }
            for b in xj.iter() {
                prop_assert!(xi.iter().any(|a| rel.holds(*a, *b)));
            }
        }
    }

    #[test]
    fn no_solution_is_ever_pruned(bp in blueprint_strategy()) {
        let (mut csp, vars) = bp.build();
        let all = solutions(&csp, &vars, &bp.domains);

        let inference = ac3(&mut csp);
        if !all.is_empty() {
            prop_assert_eq!(Outcome::Consistent, inference.outcome());
        }
        for sol in all {
            for (var, val) in vars.iter().zip(sol) {
                prop_assert!(csp.domain(var).unwrap().contains(&val));
            }
        }
    }

    #[test]
    fn wipe_out_leaves_an_empty_domain(bp in blueprint_strategy()) {
        let (mut csp, _) = bp.build();
        let inference = ac3(&mut csp);
        match inference.wiped_out() {
            None => prop_assert_eq!(Outcome::Consistent, inference.outcome()),
            Some(var) => prop_assert!(csp.domain(var).unwrap().is_empty()),
        }
    }

    #[test]
    fn undo_restores_the_exact_domains(bp in blueprint_strategy()) {
        let (mut csp, vars) = bp.build();
        let before = snapshot(&csp, &vars);

        let mut inference = ac3(&mut csp);
        prop_assert_eq!(Ok(()), inference.undo(&mut csp));
        prop_assert_eq!(&before, &snapshot(&csp, &vars));

        // a second undo is a no-op
        prop_assert_eq!(Ok(()), inference.undo(&mut csp));
        prop_assert_eq!(before, snapshot(&csp, &vars));
    }

    #[test]
    fn removals_only_shrink_the_domains(bp in blueprint_strategy()) {
        let (mut csp, vars) = bp.build();
        let before = snapshot(&csp, &vars);
        let inference = ac3(&mut csp);
        let after = snapshot(&csp, &vars);

        for (i, var) in vars.iter().enumerate() {
            let removed = inference.removed(var);
            prop_assert_eq!(before[i].len(), after[i].len() + removed.len());
            for v in removed {
                prop_assert!(before[i].contains(v));
                prop_assert!(!after[i].contains(v));
            }
        }
    }

    #[test]
    fn scoped_pass_can_be_undone(bp in blueprint_strategy(), pick in 0usize..5) {
        let (mut csp, vars) = bp.build();
        let var = &vars[pick % vars.len()];
        let value = bp.domains[pick % vars.len()][0];
        let before = snapshot(&csp, &vars);

        let mut asg = Assignment::new();
        asg.assign(var.clone(), value);
        let mut inference = ac3_assignment(&mut csp, &asg, var).unwrap();
        if !inference.is_inconsistent() {
            prop_assert_eq!(&[value], csp.domain(var).unwrap().values());
        }

        inference.undo(&mut csp).unwrap();
        prop_assert_eq!(before, snapshot(&csp, &vars));
    }

    #[test]
    fn scoped_pass_keeps_the_solutions_extending_the_assignment(
        bp in blueprint_strategy(),
        pick in 0usize..5,
    ) {
        let (mut csp, vars) = bp.build();
        let at = pick % vars.len();
        let value = bp.domains[at][0];
        let extending = solutions(&csp, &vars, &bp.domains)
            .into_iter()
            .filter(|sol| sol[at] == value)
            .collect::<Vec<_>>();

        let mut asg = Assignment::new();
        asg.assign(vars[at].clone(), value);
        let inference = ac3_assignment(&mut csp, &asg, &vars[at]).unwrap();
        if !extending.is_empty() {
            prop_assert!(!inference.is_inconsistent());
        }
        for sol in extending {
            for (var, val) in vars.iter().zip(sol) {
                prop_assert!(csp.domain(var).unwrap().contains(&val));
            }
        }
    }
}
