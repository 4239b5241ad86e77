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

const COLORS: [&str; 3] = ["red", "green", "blue"];
const REGIONS: [&str; 7] = ["WA", "NT", "SA", "Q", "NSW", "V", "T"];
const BORDERS: [(usize, usize); 9] = [
    (0, 1),
    (0, 2),
    (1, 2),
    (1, 3),
    (2, 3),
    (2, 4),
    (2, 5),
    (3, 4),
    (4, 5),
];

fn australia() -> (ConstraintNetwork<&'static str>, Vec<Variable>) {
    let mut csp = ConstraintNetwork::new();
    let vars = REGIONS
        .iter()
        .map(|name| csp.new_variable(name, COLORS))
        .collect::<Vec<_>>();
    for (a, b) in BORDERS {
        csp.add_constraint(NotEqual::new(vars[a].clone(), vars[b].clone()))
            .unwrap();
    }
    (csp, vars)
}

fn domains(csp: &ConstraintNetwork<&'static str>, vars: &[Variable]) -> Vec<Domain<&'static str>> {
    vars.iter().map(|v| csp.domain(v).unwrap().clone()).collect()
}

/// Depth first search maintaining arc consistency after each decision. Every
/// inference is undone on the way back, so the network is left as it was.
fn solve(
    csp: &mut ConstraintNetwork<&'static str>,
    vars: &[Variable],
    asg: &mut Assignment<&'static str>,
    explored: &mut usize,
) -> Option<Assignment<&'static str>> {
    let Some(var) = vars.iter().find(|v| !asg.is_assigned(v)).cloned() else {
        return Some(asg.duplicate());
    };
    let candidates = csp.domain(&var).unwrap().values().to_vec();
    for value in candidates {
        *explored += 1;
        asg.assign(var.clone(), value);
        let mut inference = ac3_assignment(csp, asg, &var).unwrap();
        let found = if inference.is_inconsistent() {
            None
        } else {
            solve(csp, vars, asg, explored)
        };
        inference.undo(csp).unwrap();
        asg.unassign(&var);
        if found.is_some() {
            return found;
        }
    }
    None
}

#[test]
fn global_pass_prunes_nothing_on_the_open_map() {
    let (mut csp, vars) = australia();
    let inference = ac3(&mut csp);
    assert!(inference.is_unchanged());
    assert_eq!(Outcome::Consistent, inference.outcome());
    assert!(domains(&csp, &vars).iter().all(|d| d.len() == 3));
}

#[test]
fn neighbors_follow_the_borders() {
    let (csp, vars) = australia();
    let sa = csp.neighbors(&vars[2]).unwrap();
    assert_eq!(
        vec![
            vars[0].clone(),
            vars[1].clone(),
            vars[3].clone(),
            vars[4].clone(),
            vars[5].clone()
        ],
        sa
    );
    assert!(csp.neighbors(&vars[6]).unwrap().is_empty());

    let (first, _) = csp.constraints_on(&vars[0]).unwrap()[0];
    assert_eq!(&vars[1], csp.other_endpoint(first, &vars[0]).unwrap());
}

#[test]
fn search_with_propagation_colors_the_map() {
    let (mut csp, vars) = australia();
    let before = domains(&csp, &vars);
    let mut explored = 0;
    let solution = solve(&mut csp, &vars, &mut Assignment::new(), &mut explored)
        .expect("australia can be colored with three colors");

    assert!(csp.is_solution(&solution));
    assert_eq!(&"red", solution.value(&vars[0]).unwrap());
    // the propagation never lets the search take a wrong turn on this map
    assert_eq!(vars.len(), explored);
    assert_eq!(before, domains(&csp, &vars));
}

#[test]
fn conflicting_choices_are_counted() {
    let (csp, vars) = australia();
    let mut asg = Assignment::new();
    asg.assign(vars[0].clone(), "red");
    asg.assign(vars[1].clone(), "green");

    assert_eq!(1, csp.conflicts(&vars[2], &"red", &asg).unwrap());
    assert_eq!(1, csp.conflicts(&vars[2], &"green", &asg).unwrap());
    assert_eq!(0, csp.conflicts(&vars[2], &"blue", &asg).unwrap());
    assert!(csp.is_consistent(&asg));
    assert!(!csp.is_complete(&asg));
}

#[test]
fn all_different_regions_decompose_into_the_border_constraints() {
    let mut csp = ConstraintNetwork::new();
    let wa = csp.new_variable("WA", COLORS);
    let nt = csp.new_variable("NT", COLORS);
    let sa = csp.new_variable("SA", COLORS);
    csp.add_constraint(AllDifferent::new(vec![wa.clone(), nt.clone(), sa.clone()]).unwrap())
        .unwrap();

    for ne in csp.decompose_all_different() {
        csp.add_constraint(ne).unwrap();
    }
    assert_eq!(4, csp.constraint_count());

    let mut asg = Assignment::new();
    asg.assign(wa.clone(), "red");
    let inference = ac3_assignment(&mut csp, &asg, &wa).unwrap();
    assert!(!inference.is_inconsistent());
    assert_eq!(&["green", "blue"], csp.domain(&nt).unwrap().values());
    assert_eq!(&["green", "blue"], csp.domain(&sa).unwrap().values());
}
