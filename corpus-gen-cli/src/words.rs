//! Bundled English word list used when no external list is supplied.

/// Common English words, one per line.
pub const ENGLISH: &str = "about
above
across
action
advice
after
again
against
almost
alone
along
already
always
amount
animal
answer
anyone
appear
around
arrive
artist
attack
autumn
avenue
balance
banana
barrel
basket
battle
beauty
because
become
before
begin
behind
believe
below
benefit
better
between
beyond
bicycle
bottle
bottom
branch
breath
bridge
bright
broken
brother
budget
burden
butter
button
cabbage
camera
candle
cannon
canvas
captain
carbon
carpet
carrot
castle
cattle
center
chance
change
chapter
charge
cheese
cherry
choice
church
circle
citizen
clever
client
closet
cluster
coffee
collar
column
comfort
common
company
compare
consist
contain
copper
corner
cotton
country
courage
cousin
cradle
create
credit
crystal
culture
curtain
custom
damage
danger
debate
decade
decide
degree
deliver
demand
desert
design
detail
device
dinner
direct
doctor
dollar
double
dragon
drawer
during
eager
early
earth
easily
either
eleven
empire
energy
engine
enough
entire
escape
estate
evening
every
exact
example
expect
expert
explain
fabric
factor
family
famous
farmer
father
feather
fellow
fierce
figure
finger
finish
flavor
flower
follow
forest
forget
formal
fortune
forward
freedom
friend
frozen
future
garden
gather
general
gentle
giant
ginger
glance
global
golden
ground
growth
guitar
hammer
handle
happen
harbor
hardly
health
heavy
height
hidden
history
hollow
honest
humble
hunger
hurry
island
jacket
journey
jungle
kitchen
ladder
language
lantern
laughter
leather
lesson
letter
little
lively
locate
lonely
lucky
luggage
machine
magnet
manage
manner
marble
market
matter
meadow
measure
medical
member
memory
mention
method
middle
minute
mirror
mission
modern
moment
monkey
morning
mother
mountain
muscle
museum
mystery
narrow
nation
native
nature
nearly
needle
neither
nephew
network
never
noble
nothing
notice
number
object
obtain
occur
ocean
office
orange
orchard
order
organ
other
outside
oxygen
palace
paper
pardon
parent
partner
pattern
pencil
people
pepper
perfect
perhaps
period
person
picture
pigeon
pillow
planet
plastic
please
plenty
pocket
poetry
police
policy
portion
possible
powder
praise
prefer
prepare
present
pretty
prince
private
problem
process
produce
profit
promise
proper
protect
proud
public
purple
purpose
puzzle
quality
quarter
question
quick
quiet
rabbit
radio
rather
reason
recent
record
reduce
reflect
region
regular
relief
remain
remember
remove
repair
repeat
rescue
result
return
reveal
reward
rhythm
ribbon
river
rocket
rough
round
rubber
saddle
safety
salmon
sample
scheme
school
science
season
second
secret
section
seldom
select
sentence
serious
service
settle
seven
shadow
shallow
share
sharp
shelter
shoulder
signal
silence
silver
simple
single
sister
smooth
social
source
speak
special
spirit
spread
spring
square
stable
station
steady
still
stomach
stone
storm
story
strange
stream
street
string
strong
student
studio
subject
sudden
suffer
sugar
summer
supply
support
surface
survive
sweet
symbol
system
table
talent
target
temple
tender
theater
theory
thick
thing
think
thirty
thought
thread
throat
through
thunder
ticket
timber
tissue
toward
travel
treasure
triangle
trouble
truth
tunnel
turtle
twelve
twenty
under
unique
until
useful
usual
valley
value
velvet
venture
victory
village
violet
visible
vision
visit
voice
volume
voyage
wagon
wander
warren
water
wealth
weather
welcome
whisper
willow
window
winter
wisdom
within
without
wonder
wooden
worry
yellow
young
zealous";
