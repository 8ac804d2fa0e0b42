mod api_tests;
mod dashboard_tests;
mod feedback_tests;
