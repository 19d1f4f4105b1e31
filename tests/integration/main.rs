mod state_transitions;
