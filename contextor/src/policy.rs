//! The HR policy manual every answer is grounded on.

/// Company HR policy manual. Immutable for the life of the process.
pub const HR_POLICY_TEXT: &str = "\
*** COMPANY HR POLICY MANUAL ***

1. LEAVE POLICY
   - Casual Leave (CL): Employees are entitled to 12 days of CL per year.
   - Sick Leave (SL): 10 days of paid sick leave per year. Medical certificate required for >2 days.
   - Privilege Leave (PL): 15 days per year, applicable after completing probation.
   - Maternity Leave: 26 weeks of paid leave for expecting mothers.
   - Paternity Leave: 1 week of paid leave for new fathers.

2. WORKING HOURS
   - Standard hours are 9:00 AM to 6:00 PM, Monday to Friday.
   - Flexible timing is allowed with manager approval (core hours 11 AM - 4 PM).
   - Lunch break is 1 hour, typically between 1:00 PM and 2:00 PM.

3. HEALTH BENEFITS
   - All employees are covered under Group Health Insurance up to $5,000.
   - Gym reimbursement of $30/month is available upon submission of bills.
   - Annual health checkup is sponsored by the company once per year.

4. REMOTE WORK
   - Employees are allowed 2 days of Work From Home (WFH) per week.
   - Full remote options depend on the project requirements and manager approval.

5. PROBATION & NOTICE PERIOD
   - Standard probation period is 3 months.
   - Notice period during probation is 15 days.
   - Notice period after confirmation is 60 days.
";

pub fn policy_text() -> &'static str {
    HR_POLICY_TEXT
}
